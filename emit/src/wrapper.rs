/// Native entry-point emitter.
///
/// For one overload this emits a self-contained C++ function under the
/// fixed boundary signature `(nargout, out[], nargin, in[])`: arity check,
/// argument unmarshal, the native static call, result marshal. The symbol
/// name is derived deterministically from the MATLAB class name, the
/// method name, and the session-assigned id.

use interface::{Class, Overload};

use crate::error::EmitError;
use crate::sink::Sink;

/// ASCII identifier check; generated symbol and local names must pass it.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Deterministic entry symbol: `{matlab_class}_{method}_{id}`.
pub fn entry_symbol(class: &Class, method_name: &str, id: usize) -> String {
    format!("{}_{}_{}", class.matlab_name, method_name, id)
}

fn validate(
    class: &Class,
    method_name: &str,
    overload_idx: usize,
    overload: &Overload,
) -> Result<(), EmitError> {
    if !is_identifier(method_name) {
        return Err(EmitError::InvalidMethodName {
            class: class.matlab_name.clone(),
            method: method_name.to_string(),
        });
    }
    for arg in overload.args.iter() {
        if !is_identifier(&arg.name) {
            return Err(EmitError::InvalidArgumentName {
                class: class.matlab_name.clone(),
                method: method_name.to_string(),
                overload: overload_idx,
                name: arg.name.clone(),
            });
        }
    }
    for slot in overload.ret.slots() {
        if slot.cpp_type.is_empty() || slot.cpp_type == "void" {
            return Err(EmitError::MalformedReturn {
                class: class.matlab_name.clone(),
                method: method_name.to_string(),
                overload: overload_idx,
                ty: slot.cpp_type.clone(),
            });
        }
    }
    Ok(())
}

/// Emit the entry function for one overload into the wrapper sink and
/// return its symbol name for function-table registration.
pub fn wrapper_fragment(
    file: &mut Sink,
    class: &Class,
    method_name: &str,
    overload_idx: usize,
    overload: &Overload,
    id: usize,
) -> Result<String, EmitError> {
    validate(class, method_name, overload_idx, overload)?;

    let symbol = entry_symbol(class, method_name, id);
    let mut body = String::new();

    body.push_str(&format!(
        "void {symbol}(int nargout, mxArray *out[], int nargin, const mxArray *in[])\n{{\n"
    ));

    // Owned-handle aliases for class-category results.
    for slot in overload.ret.class_slots() {
        body.push_str(&format!(
            "  typedef std::shared_ptr<{}> {};\n",
            slot.cpp_type,
            slot.alias(),
        ));
    }

    // Defensive arity assertion, redundant with the proxy's predicate.
    // Guards any caller that reaches the entry without going through the
    // generated dispatch.
    body.push_str(&format!(
        "  checkArguments(\"{}.{}\",nargout,nargin,{});\n",
        class.matlab_name,
        method_name,
        overload.args.len(),
    ));

    // Static methods carry no receiver: boundary inputs start at 0.
    overload.args.emit_unmarshal(&mut body, 0);

    let call = format!("{}::{}({})", class.cpp_name, method_name, overload.args.names());
    match overload.ret.result_type() {
        Some(ty) => body.push_str(&format!("  {ty} result = {call};\n")),
        None => body.push_str(&format!("  {call};\n")),
    }

    overload.ret.emit_marshal(&mut body);

    body.push_str("}\n\n");
    file.push(&body);
    Ok(symbol)
}
