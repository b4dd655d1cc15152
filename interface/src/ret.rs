/// Return-value shapes of wrapped native methods.
///
/// A method returns nothing, one value, or a pair of values. Every
/// non-void slot is either a by-value basic type or a wrapped class; class
/// results cross the boundary as owned shared-pointer handles around a
/// freshly allocated native instance.

use crate::argument::base_name;

/// How one return slot crosses the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCategory {
    /// Copied across the boundary by value (`wrap< T >`).
    Basic,
    /// Wrapped as an owned handle (`wrap_shared_ptr`).
    Class,
}

// ============================================================================
// ReturnSlot
// ============================================================================

/// One returned value: C++ type plus its boundary category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnSlot {
    pub cpp_type: String,
    pub category: ReturnCategory,
}

impl ReturnSlot {
    pub fn basic(cpp_type: &str) -> Self {
        Self {
            cpp_type: cpp_type.to_string(),
            category: ReturnCategory::Basic,
        }
    }

    pub fn class(cpp_type: &str) -> Self {
        Self {
            cpp_type: cpp_type.to_string(),
            category: ReturnCategory::Class,
        }
    }

    #[inline]
    pub fn is_class(&self) -> bool {
        self.category == ReturnCategory::Class
    }

    /// Unqualified type name, used for alias and runtime tag text.
    pub fn base(&self) -> &str {
        base_name(&self.cpp_type)
    }

    /// Name of the shared-pointer alias emitted for a class slot.
    pub fn alias(&self) -> String {
        format!("Shared{}", self.base())
    }

    /// Write boundary output `out[slot]` from the C++ expression `expr`.
    fn emit_wrap(&self, out: &mut String, slot: usize, expr: &str) {
        match self.category {
            ReturnCategory::Basic => {
                out.push_str(&format!(
                    "  out[{slot}] = wrap< {ty} >({expr});\n",
                    ty = self.cpp_type,
                ));
            }
            ReturnCategory::Class => {
                out.push_str(&format!(
                    "  out[{slot}] = wrap_shared_ptr({alias}(new {qual}({expr})),\"{base}\");\n",
                    alias = self.alias(),
                    qual = self.cpp_type,
                    base = self.base(),
                ));
            }
        }
    }
}

// ============================================================================
// ReturnValue
// ============================================================================

/// Tagged return shape of one overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnValue {
    Void,
    Single(ReturnSlot),
    Pair(ReturnSlot, ReturnSlot),
}

impl ReturnValue {
    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, ReturnValue::Void)
    }

    /// Number of boundary outputs this shape produces (0, 1, or 2).
    pub fn output_count(&self) -> usize {
        match self {
            ReturnValue::Void => 0,
            ReturnValue::Single(_) => 1,
            ReturnValue::Pair(_, _) => 2,
        }
    }

    /// All slots, in output order.
    pub fn slots(&self) -> Vec<&ReturnSlot> {
        match self {
            ReturnValue::Void => Vec::new(),
            ReturnValue::Single(s) => vec![s],
            ReturnValue::Pair(a, b) => vec![a, b],
        }
    }

    /// Slots that need an owned-handle alias in the entry function.
    pub fn class_slots(&self) -> Vec<&ReturnSlot> {
        self.slots().into_iter().filter(|s| s.is_class()).collect()
    }

    /// C++ type of the local the native result is bound to, `None` for
    /// void. A pair result is bound as one `std::pair` unit.
    pub fn result_type(&self) -> Option<String> {
        match self {
            ReturnValue::Void => None,
            ReturnValue::Single(s) => Some(s.cpp_type.clone()),
            ReturnValue::Pair(a, b) => {
                Some(format!("std::pair< {}, {} >", a.cpp_type, b.cpp_type))
            }
        }
    }

    /// Write the boundary outputs from the bound `result` local.
    ///
    /// Void writes nothing. A pair writes both outputs from the single
    /// paired local, never from two sequential native calls.
    pub fn emit_marshal(&self, out: &mut String) {
        match self {
            ReturnValue::Void => {}
            ReturnValue::Single(s) => s.emit_wrap(out, 0, "result"),
            ReturnValue::Pair(a, b) => {
                a.emit_wrap(out, 0, "result.first");
                b.emit_wrap(out, 1, "result.second");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_counts() {
        assert_eq!(ReturnValue::Void.output_count(), 0);
        assert_eq!(ReturnValue::Single(ReturnSlot::basic("double")).output_count(), 1);
        assert_eq!(
            ReturnValue::Pair(ReturnSlot::basic("double"), ReturnSlot::basic("bool"))
                .output_count(),
            2
        );
    }

    #[test]
    fn result_types() {
        assert_eq!(ReturnValue::Void.result_type(), None);
        assert_eq!(
            ReturnValue::Single(ReturnSlot::class("gtsam::Point3")).result_type(),
            Some("gtsam::Point3".to_string())
        );
        assert_eq!(
            ReturnValue::Pair(ReturnSlot::class("Point3"), ReturnSlot::basic("double"))
                .result_type(),
            Some("std::pair< Point3, double >".to_string())
        );
    }

    #[test]
    fn marshal_void_writes_nothing() {
        let mut out = String::new();
        ReturnValue::Void.emit_marshal(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn marshal_single_basic() {
        let mut out = String::new();
        ReturnValue::Single(ReturnSlot::basic("double")).emit_marshal(&mut out);
        assert_eq!(out, "  out[0] = wrap< double >(result);\n");
    }

    #[test]
    fn marshal_single_class_allocates_handle() {
        let mut out = String::new();
        ReturnValue::Single(ReturnSlot::class("gtsam::Point3")).emit_marshal(&mut out);
        assert_eq!(
            out,
            "  out[0] = wrap_shared_ptr(SharedPoint3(new gtsam::Point3(result)),\"Point3\");\n"
        );
    }

    #[test]
    fn marshal_pair_uses_first_and_second() {
        let mut out = String::new();
        ReturnValue::Pair(ReturnSlot::class("Pose2"), ReturnSlot::basic("double"))
            .emit_marshal(&mut out);
        assert_eq!(
            out,
            "  out[0] = wrap_shared_ptr(SharedPose2(new Pose2(result.first)),\"Pose2\");\n\
             \x20 out[1] = wrap< double >(result.second);\n"
        );
    }

    #[test]
    fn class_slots_filter() {
        let ret = ReturnValue::Pair(ReturnSlot::class("Pose2"), ReturnSlot::basic("double"));
        let slots = ret.class_slots();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].alias(), "SharedPose2");
    }
}
