/// Host-side dispatch emitter.
///
/// For one method name this emits a MATLAB function that resolves the
/// overload at runtime: an ordered `if`/`elseif` chain testing argument
/// count and per-argument `isa` tags, each branch calling the boundary
/// function with the id of its entry, and a trailing unconditional error
/// branch. Resolution is first-match by registration order, not
/// best-match: with identical arity and tags the earlier overload always
/// wins and the later one is unreachable.

use interface::{Class, ReturnValue, StaticMethod};

use crate::error::EmitError;
use crate::sink::Sink;
use crate::table::FunctionTable;
use crate::wrapper::{is_identifier, wrapper_fragment};

/// Uppercase the first byte iff it is an ASCII lowercase letter.
///
/// The proxy exposes methods under a capitalized name; the rule is a fixed
/// ASCII transform so generated sources are identical across locales.
pub fn ascii_capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// MATLAB output-binding prefix for one return shape.
fn output_binding(ret: &ReturnValue) -> &'static str {
    match ret {
        ReturnValue::Void => "",
        ReturnValue::Single(_) => "varargout{1} = ",
        ReturnValue::Pair(_, _) => "[ varargout{1} varargout{2} ] = ",
    }
}

/// Emit the dispatch function for `method` into the proxy sink, emitting
/// one native entry per overload into the wrapper sink as it goes.
///
/// Each overload consumes the next sequential id from `table`; the same id
/// is embedded in the proxy branch and in the entry symbol, which is what
/// keeps the two artifacts callable against each other.
pub fn proxy_wrapper_fragments(
    proxy: &mut Sink,
    wrapper: &mut Sink,
    class: &Class,
    method: &StaticMethod,
    wrapper_name: &str,
    table: &mut FunctionTable,
) -> Result<(), EmitError> {
    if !is_identifier(&method.name) {
        return Err(EmitError::InvalidMethodName {
            class: class.matlab_name.clone(),
            method: method.name.clone(),
        });
    }

    let upper_name = ascii_capitalize(&method.name);
    proxy.push(&format!(
        "    function varargout = {upper_name}(varargin)\n"
    ));

    for (overload_idx, overload) in method.overloads.iter().enumerate() {
        let id = table.len();
        let n_args = overload.args.len();

        // Argument-count predicate, then one isa conjunct per argument.
        let keyword = if overload_idx == 0 { "if" } else { "elseif" };
        let mut cond = format!("      {keyword} length(varargin) == {n_args}");
        for (i, arg) in overload.args.iter().enumerate() {
            cond.push_str(&format!(
                " && isa(varargin{{{}}},'{}')",
                i + 1,
                arg.matlab_class(),
            ));
        }
        proxy.push(&cond);
        proxy.push("\n");

        proxy.push(&format!(
            "        {}{}({}, varargin{{:}});\n",
            output_binding(&overload.ret),
            wrapper_name,
            id,
        ));

        let symbol = wrapper_fragment(wrapper, class, &method.name, overload_idx, overload, id)?;
        let assigned = table.register(symbol);
        debug_assert_eq!(assigned, id);
    }

    proxy.push("      else\n");
    proxy.push(&format!(
        "        error('Arguments do not match any overload of function {}.{}');\n",
        class.matlab_name, upper_name,
    ));
    proxy.push("      end\n");
    proxy.push("    end\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_is_ascii_only() {
        assert_eq!(ascii_capitalize("norm"), "Norm");
        assert_eq!(ascii_capitalize("Expmap"), "Expmap");
        assert_eq!(ascii_capitalize("_private"), "_private");
        assert_eq!(ascii_capitalize(""), "");
    }
}
