/// Ordered id → native-symbol dispatch table built during one generation
/// session.
///
/// An entry's id equals its position at the moment of registration; ids
/// are monotonically increasing across the whole session, never reset per
/// method or per class, and never reused. The id is the sole linkage
/// between a proxy branch and its entry function.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FunctionTable {
    symbols: Vec<String>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `symbol` and return its newly assigned id.
    pub fn register(&mut self, symbol: String) -> usize {
        let id = self.symbols.len();
        self.symbols.push(symbol);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, id: usize) -> Option<&str> {
        self.symbols.get(id).map(String::as_str)
    }

    /// `(id, symbol)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.symbols.iter().enumerate().map(|(id, s)| (id, s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_positions() {
        let mut table = FunctionTable::new();
        assert_eq!(table.register("A_f_0".to_string()), 0);
        assert_eq!(table.register("A_f_1".to_string()), 1);
        assert_eq!(table.register("B_g_2".to_string()), 2);
        assert_eq!(table.symbol(1), Some("A_f_1"));
        assert_eq!(table.symbol(3), None);
        let ids: Vec<_> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [0, 1, 2]);
    }
}
