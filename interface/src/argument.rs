/// Arguments of a wrapped native method.
///
/// Each argument carries the declared C++ type and the parameter name used
/// when forwarding into the native call. The MATLAB-observable type tag
/// (`matlab_class`) drives the `isa` predicates in the generated dispatch
/// proxy; the C++ type drives unmarshaling in the generated entry function.

use std::fmt;

/// C++ types that cross the boundary by value rather than as a handle.
const BASIC_TYPES: &[&str] = &[
    "bool",
    "char",
    "unsigned char",
    "string",
    "int",
    "size_t",
    "double",
    "Vector",
    "Matrix",
];

/// True if `cpp_type` is one of the by-value boundary types.
pub fn is_basic_type(cpp_type: &str) -> bool {
    BASIC_TYPES.contains(&cpp_type)
}

/// Last `::` segment of a possibly-qualified C++ type name.
///
/// `"gtsam::Point3"` → `"Point3"`, `"double"` → `"double"`.
pub fn base_name(cpp_type: &str) -> &str {
    cpp_type.rsplit("::").next().unwrap_or(cpp_type)
}

// ============================================================================
// Argument
// ============================================================================

/// One formal argument: declared C++ type plus parameter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub cpp_type: String,
    pub name: String,
}

impl Argument {
    pub fn new(cpp_type: &str, name: &str) -> Self {
        Self {
            cpp_type: cpp_type.to_string(),
            name: name.to_string(),
        }
    }

    /// MATLAB class tag checked by the proxy's `isa` predicate.
    ///
    /// The mapping is a fixed ASCII table, independent of locale: `bool`
    /// maps to `logical`; character and string types to `char`; the
    /// numeric and linear-algebra types to `double`; everything else is a
    /// wrapped class and matches on its unqualified class name.
    pub fn matlab_class(&self) -> &str {
        match self.cpp_type.as_str() {
            "bool" => "logical",
            "char" | "unsigned char" | "string" => "char",
            "int" | "size_t" | "double" | "Vector" | "Matrix" => "double",
            other => base_name(other),
        }
    }

    /// True if this argument is a wrapped class instance (passed across
    /// the boundary as a shared-pointer handle).
    pub fn is_class(&self) -> bool {
        !is_basic_type(&self.cpp_type)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cpp_type, self.name)
    }
}

// ============================================================================
// ArgumentList
// ============================================================================

/// Ordered formal argument list of one overload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    args: Vec<Argument>,
}

impl ArgumentList {
    pub fn new(args: Vec<Argument>) -> Self {
        Self { args }
    }

    /// Empty list (a zero-arity overload).
    pub fn empty() -> Self {
        Self { args: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.args.iter()
    }

    /// Comma-joined parameter names, in order, for the native call
    /// expression.
    pub fn names(&self) -> String {
        self.args
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Emit one C++ local binding per argument from the raw boundary
    /// inputs, starting at input index `start`.
    ///
    /// Static methods pass `start = 0`: there is no receiver object in the
    /// input array. Basic types unwrap by value; class types unwrap their
    /// shared-pointer handle and bind a reference to the instance.
    pub fn emit_unmarshal(&self, out: &mut String, start: usize) {
        for (i, arg) in self.args.iter().enumerate() {
            let idx = start + i;
            if arg.is_class() {
                let base = base_name(&arg.cpp_type);
                out.push_str(&format!(
                    "  {base}& {name} = *unwrap_shared_ptr< {qual} >(in[{idx}], \"{base}\");\n",
                    name = arg.name,
                    qual = arg.cpp_type,
                ));
            } else {
                out.push_str(&format!(
                    "  {ty} {name} = unwrap< {ty} >(in[{idx}]);\n",
                    ty = arg.cpp_type,
                    name = arg.name,
                ));
            }
        }
    }
}
