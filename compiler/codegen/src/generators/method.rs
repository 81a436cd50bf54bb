//! Binding emitter: one `async fn` per schema method.
//!
//! Every binding follows the same template:
//!
//! 1. required parameters become positional arguments, the rest are gathered
//!    in a `<Method>Opts` struct passed as the trailing `opts` argument;
//! 2. each parameter is added to a `Params` set under its schema name,
//!    scalars through `to_string()` and everything else through
//!    `codec::encode_param`;
//! 3. the set is handed to `Dispatch::dispatch` and the reply is decoded
//!    into the mapped return type.
//!
//! Any failure returns `Outcome::failure(<zero value>, err)`. Skipped upload
//! arguments are consumed with `let _ = ..;`. The binding's own locals are
//! suffixed with `_` until they no longer collide with a positional argument.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use ir::{ApiModel, MethodDescription, MethodField};

use super::doc_comment::{write_doc_comment, write_doc_lines};
use crate::type_mapper::{RustType, TypeMapper};
use crate::utils::{method_to_fn_name, sanitize_external_identifier, snake_to_pascal_case};
use crate::{CodeGenerator, Result};

/// Clippy's default `too_many_arguments` threshold, receiver included.
const MAX_ARGUMENTS: usize = 7;

/// Preferred name of the request parameter set inside every binding.
const PARAMS_VAR: &str = "request_params";

/// Preferred name of the raw reply inside every binding.
const RESPONSE_VAR: &str = "response";

/// Preferred name of the trailing options argument.
const OPTS_VAR: &str = "opts";

/// Emits the methods unit body as `impl <client_type>` blocks.
#[derive(Debug, Clone)]
pub struct MethodGenerator {
    client_type: String,
}

/// A parameter resolved against the type mapper.
struct Argument<'a> {
    field: &'a MethodField,
    ident: String,
    ty: RustType,
}

impl Argument<'_> {
    /// Expression reading the argument inside the binding body.
    fn access(&self, locals: &Locals) -> String {
        if self.field.required {
            self.ident.clone()
        } else {
            format!("{}.{}", locals.opts, self.ident)
        }
    }
}

/// Names of the locals a binding introduces next to its arguments.
struct Locals {
    params: String,
    response: String,
    opts: String,
}

impl Locals {
    fn avoiding(arguments: &[&Argument<'_>]) -> Self {
        let taken: BTreeSet<&str> = arguments.iter().map(|arg| arg.ident.as_str()).collect();
        Self {
            params: fresh_local(PARAMS_VAR, &taken),
            response: fresh_local(RESPONSE_VAR, &taken),
            opts: fresh_local(OPTS_VAR, &taken),
        }
    }
}

fn fresh_local(base: &str, taken: &BTreeSet<&str>) -> String {
    let mut name = base.to_string();
    while taken.contains(name.as_str()) {
        name.push('_');
    }
    name
}

impl MethodGenerator {
    /// Create an emitter implementing bindings on `client_type`.
    pub fn new(client_type: impl Into<String>) -> Self { Self { client_type: client_type.into() } }

    /// Name of the options struct for `method`.
    pub fn opts_type_name(method: &str) -> String { format!("{}Opts", snake_to_pascal_case(method)) }

    /// Render the optional-parameter struct and the binding for one method.
    pub fn render_method(
        &self,
        mapper: &TypeMapper<'_>,
        name: &str,
        method: &MethodDescription,
    ) -> Result<String> {
        let arguments: Vec<Argument<'_>> = method
            .fields
            .iter()
            .map(|field| Argument {
                field,
                ident: sanitize_external_identifier(&field.parameter),
                ty: mapper.map_parameter(field),
            })
            .collect();
        let (required, optional): (Vec<&Argument<'_>>, Vec<&Argument<'_>>) =
            arguments.iter().partition(|arg| arg.field.required);

        let locals = Locals::avoiding(&required);
        let return_type = mapper.map_return(method);
        let fallback = return_type.zero_value();
        let opts_type = Self::opts_type_name(name);

        let mut buf = String::new();

        if !optional.is_empty() {
            writeln!(buf, "/// Optional parameters of `{name}`.")?;
            writeln!(buf, "#[derive(Debug, Clone, Default)]")?;
            writeln!(buf, "pub struct {opts_type} {{")?;
            for arg in &optional {
                write_doc_comment(&mut buf, &arg.field.description, "    ")?;
                writeln!(buf, "    pub {}: {},", arg.ident, arg.ty)?;
            }
            writeln!(buf, "}}")?;
            writeln!(buf)?;
        }

        let mut signature = vec!["&self".to_string()];
        signature.extend(required.iter().map(|arg| format!("{}: {}", arg.ident, arg.ty)));
        if !optional.is_empty() {
            signature.push(format!("{}: {opts_type}", locals.opts));
        }

        writeln!(buf, "impl {} {{", self.client_type)?;
        write_doc_lines(&mut buf, &method.description, "    ")?;
        if signature.len() > MAX_ARGUMENTS {
            writeln!(buf, "    #[allow(clippy::too_many_arguments)]")?;
        }
        writeln!(
            buf,
            "    pub async fn {}({}) -> Outcome<{}> {{",
            method_to_fn_name(name),
            signature.join(", "),
            return_type
        )?;

        let mutates = arguments.iter().any(|arg| !arg.field.is_upload());
        let binding = if mutates { "let mut" } else { "let" };
        let params = &locals.params;
        let response = &locals.response;
        writeln!(buf, "        {binding} {params} = Params::new();")?;

        for arg in &arguments {
            self.write_parameter(&mut buf, name, arg, &locals, &fallback)?;
        }

        writeln!(buf, "        let {response} = match self.dispatch({name:?}, {params}, None).await {{")?;
        writeln!(buf, "            Ok(response) => response,")?;
        writeln!(buf, "            Err(err) => return Outcome::failure({fallback}, err),")?;
        writeln!(buf, "        }};")?;

        match &return_type {
            RustType::Nullable(inner) => {
                writeln!(buf, "        match codec::decode::<{inner}>(&{response}) {{")?;
                writeln!(buf, "            Ok(value) => Outcome::success(Some(Box::new(value))),")?;
            }
            other => {
                writeln!(buf, "        match codec::decode::<{other}>(&{response}) {{")?;
                writeln!(buf, "            Ok(value) => Outcome::success(value),")?;
            }
        }
        writeln!(buf, "            Err(err) => Outcome::failure({fallback}, err),")?;
        writeln!(buf, "        }}")?;
        writeln!(buf, "    }}")?;
        writeln!(buf, "}}")?;
        Ok(buf)
    }

    fn write_parameter(
        &self,
        buf: &mut String,
        method: &str,
        arg: &Argument<'_>,
        locals: &Locals,
        fallback: &str,
    ) -> Result<()> {
        let wire_name = &arg.field.parameter;
        let value = arg.access(locals);
        let params = &locals.params;

        if arg.ty.is_primitive() {
            writeln!(buf, "        {params}.add({wire_name:?}, {value}.to_string());")?;
            return Ok(());
        }

        if arg.field.is_upload() {
            tracing::debug!(method, parameter = %wire_name, "skipping upload parameter");
            if arg.field.required {
                writeln!(buf, "        let _ = {value};")?;
            }
            return Ok(());
        }

        let (indent, guarded) = if arg.field.is_array() {
            writeln!(buf, "        if !{value}.is_empty() {{")?;
            ("            ", true)
        } else {
            ("        ", false)
        };
        writeln!(buf, "{indent}match codec::encode_param({wire_name:?}, &{value}) {{")?;
        writeln!(buf, "{indent}    Ok(encoded) => {params}.add({wire_name:?}, encoded),")?;
        writeln!(buf, "{indent}    Err(err) => return Outcome::failure({fallback}, err),")?;
        writeln!(buf, "{indent}}}")?;
        if guarded {
            writeln!(buf, "        }}")?;
        }
        Ok(())
    }
}

impl CodeGenerator for MethodGenerator {
    fn generate(&self, model: &ApiModel) -> Result<String> {
        let mapper = TypeMapper::new(model);
        let mut out = String::new();
        for (name, method) in model.methods() {
            tracing::trace!(method = name, parameters = method.fields.len(), "emitting binding");
            out.push_str(&self.render_method(&mapper, name, method)?);
            out.push('\n');
        }
        Ok(out)
    }
}
