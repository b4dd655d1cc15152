/// Overload registry and module description.
///
/// The registry is built once per generation session by repeated
/// `register` calls and then consumed by emission; it is never mutated
/// afterwards. Order is semantically meaningful on both axes: methods keep
/// first-registration order, and the overloads of one method keep
/// registration order, which the generated proxy resolves first-match.

use crate::argument::ArgumentList;
use crate::ret::ReturnValue;

/// One signature variant of a method: argument list plus return shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overload {
    pub args: ArgumentList,
    pub ret: ReturnValue,
}

/// A named static method with its overloads in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMethod {
    pub name: String,
    pub overloads: Vec<Overload>,
}

// ============================================================================
// MethodRegistry
// ============================================================================

/// Ordered method-name → overload-sequence registry for one class.
///
/// Duplicate overloads (identical arity and type tags) are legal input;
/// the generated dispatch selects the earlier registration and the later
/// one is unreachable. That is a defined policy, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodRegistry {
    methods: Vec<StaticMethod>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one overload to `name`, creating the method on first use.
    /// Never rejects; there are no error conditions.
    pub fn register(&mut self, name: &str, args: ArgumentList, ret: ReturnValue) {
        let overload = Overload { args, ret };
        match self.methods.iter_mut().find(|m| m.name == name) {
            Some(method) => method.overloads.push(overload),
            None => self.methods.push(StaticMethod {
                name: name.to_string(),
                overloads: vec![overload],
            }),
        }
    }

    /// Methods in first-registration order.
    pub fn methods(&self) -> &[StaticMethod] {
        &self.methods
    }

    pub fn get(&self, name: &str) -> Option<&StaticMethod> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Total overload count across all methods.
    pub fn overload_count(&self) -> usize {
        self.methods.iter().map(|m| m.overloads.len()).sum()
    }
}

// ============================================================================
// Class / Module
// ============================================================================

/// One wrapped class: qualified C++ name, MATLAB-visible name, and the
/// static methods to bind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Class {
    pub cpp_name: String,
    pub matlab_name: String,
    pub methods: MethodRegistry,
}

impl Class {
    pub fn new(cpp_name: &str, matlab_name: &str) -> Self {
        Self {
            cpp_name: cpp_name.to_string(),
            matlab_name: matlab_name.to_string(),
            methods: MethodRegistry::new(),
        }
    }
}

/// Everything one generation session consumes: the boundary function name
/// shared by every proxy call, the `using namespace` lines for the
/// generated translation unit, and the classes in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    pub wrapper_name: String,
    pub using_namespaces: Vec<String>,
    pub classes: Vec<Class>,
}

impl Module {
    pub fn new(wrapper_name: &str) -> Self {
        Self {
            wrapper_name: wrapper_name.to_string(),
            using_namespaces: Vec::new(),
            classes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{Argument, ArgumentList};
    use crate::ret::{ReturnSlot, ReturnValue};

    fn one_arg(ty: &str) -> ArgumentList {
        ArgumentList::new(vec![Argument::new(ty, "x")])
    }

    #[test]
    fn overloads_keep_registration_order() {
        let mut reg = MethodRegistry::new();
        reg.register("foo", ArgumentList::empty(), ReturnValue::Void);
        reg.register(
            "foo",
            one_arg("double"),
            ReturnValue::Single(ReturnSlot::basic("double")),
        );
        let m = reg.get("foo").unwrap();
        assert_eq!(m.overloads.len(), 2);
        assert_eq!(m.overloads[0].args.len(), 0);
        assert_eq!(m.overloads[1].args.len(), 1);
    }

    #[test]
    fn methods_keep_first_registration_order() {
        let mut reg = MethodRegistry::new();
        reg.register("zeta", ArgumentList::empty(), ReturnValue::Void);
        reg.register("alpha", ArgumentList::empty(), ReturnValue::Void);
        reg.register("zeta", one_arg("int"), ReturnValue::Void);
        let names: Vec<_> = reg.methods().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
        assert_eq!(reg.overload_count(), 3);
    }

    #[test]
    fn duplicate_overloads_are_accepted() {
        let mut reg = MethodRegistry::new();
        reg.register("foo", one_arg("double"), ReturnValue::Void);
        reg.register("foo", one_arg("double"), ReturnValue::Void);
        assert_eq!(reg.get("foo").unwrap().overloads.len(), 2);
    }
}
