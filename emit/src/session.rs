/// Generation session: one single-threaded, single-pass walk over a
/// finalized module.
///
/// Classes are processed in declaration order and methods in registration
/// order; ids flow from one shared function table so they stay monotonic
/// across the whole session. A failure on any overload aborts the session
/// and no artifact is returned — callers never see partial output.

use interface::Module;

use crate::error::EmitError;
use crate::proxy::proxy_wrapper_fragments;
use crate::sink::Sink;
use crate::table::FunctionTable;

/// One generated MATLAB proxy file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyFile {
    /// MATLAB class name; the conventional file name is `{class_name}.m`.
    pub class_name: String,
    pub text: String,
}

/// Everything a successful session produces.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub proxies: Vec<ProxyFile>,
    /// The single C++ translation unit with every entry function and the
    /// id dispatch at the end.
    pub wrapper: String,
    /// Finalized id → symbol table, read-only from here on.
    pub table: FunctionTable,
}

/// Run one generation session over `module`.
pub fn generate(module: &Module) -> Result<Artifacts, EmitError> {
    let mut table = FunctionTable::new();
    let mut wrapper = Sink::new();
    emit_preamble(&mut wrapper, module);

    let mut proxies = Vec::with_capacity(module.classes.len());
    for class in &module.classes {
        let mut proxy = Sink::new();
        proxy.push(&format!("classdef {}\n", class.matlab_name));
        proxy.push("  methods(Static)\n");
        for method in class.methods.methods() {
            proxy_wrapper_fragments(
                &mut proxy,
                &mut wrapper,
                class,
                method,
                &module.wrapper_name,
                &mut table,
            )?;
        }
        proxy.push("  end\n");
        proxy.push("end\n");
        proxies.push(ProxyFile {
            class_name: class.matlab_name.clone(),
            text: proxy.into_string(),
        });
    }

    emit_dispatch(&mut wrapper, module, &table);

    Ok(Artifacts {
        proxies,
        wrapper: wrapper.into_string(),
        table,
    })
}

fn emit_preamble(file: &mut Sink, module: &Module) {
    file.push("// Automatically generated boundary code. Do not edit.\n");
    file.push("#include <matwrap/matlab.h>\n");
    file.push("\n");
    file.push("#include <memory>\n");
    file.push("#include <utility>\n");
    file.push("\n");
    if !module.using_namespaces.is_empty() {
        for ns in &module.using_namespaces {
            file.push(&format!("using namespace {ns};\n"));
        }
        file.push("\n");
    }
}

/// The runtime boundary consults the function table through this switch:
/// the leading input selects the entry by id, the rest of the inputs are
/// forwarded unchanged.
fn emit_dispatch(file: &mut Sink, module: &Module, table: &FunctionTable) {
    file.push("void mexFunction(int nargout, mxArray *out[], int nargin, const mxArray *in[])\n");
    file.push("{\n");
    file.push("  if (nargin < 1)\n");
    file.push(&format!(
        "    mexErrMsgTxt(\"{}: first input must be the function id\");\n",
        module.wrapper_name,
    ));
    file.push("  const int id = unwrap< int >(in[0]);\n");
    file.push("  switch (id) {\n");
    for (id, symbol) in table.iter() {
        file.push(&format!(
            "  case {id}: {symbol}(nargout, out, nargin-1, in+1); break;\n"
        ));
    }
    file.push("  default:\n");
    file.push(&format!(
        "    mexErrMsgTxt(\"{}: unknown function id\");\n",
        module.wrapper_name,
    ));
    file.push("  }\n");
    file.push("}\n");
}
