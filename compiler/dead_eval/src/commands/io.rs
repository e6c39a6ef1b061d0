//! Console commands: `printtext`, `showvars`, `input`, `help`.

use crate::errors::{input_closed, input_failed, unknown_type, wrong_arity, ScriptResult};
use crate::interpreter::Interpreter;
use crate::value::VarType;

use super::Command;

pub(super) fn printtext(interp: &Interpreter, args: &[String], line: usize) -> ScriptResult<()> {
    if args.is_empty() {
        return Err(wrong_arity(line, "printtext needs text or var names"));
    }
    // Only variable names are substituted; other words print as lexed.
    let words: Vec<String> = args
        .iter()
        .map(|word| match interp.store.get(word) {
            Some(var) => var.value.to_string(),
            None => word.clone(),
        })
        .collect();
    interp.print_handler.println(&words.join(" "));
    Ok(())
}

pub(super) fn showvars(interp: &Interpreter) {
    if interp.store.is_empty() {
        interp.print_handler.println("(no vars)");
        return;
    }
    for (name, var) in interp.store.iter() {
        interp
            .print_handler
            .println(&format!("{} {name} = {}", var.ty, var.value));
    }
}

/// `input <type> <name>`: prompt, read one line, parse it by type, store it.
pub(super) fn input(interp: &mut Interpreter, args: &[String], line: usize) -> ScriptResult<()> {
    let [keyword, name] = args else {
        return Err(wrong_arity(line, "input needs: <type> <varname>"));
    };
    let ty = VarType::from_keyword(&keyword.to_lowercase())
        .ok_or_else(|| unknown_type(line, keyword))?;

    interp.print_handler.print(&format!("Enter {ty} {name}: "));
    let raw = interp
        .input
        .read_line()
        .map_err(|err| input_failed(line, &err))?
        .ok_or_else(|| input_closed(line))?;

    let text = match ty {
        VarType::Str => raw.as_str(),
        _ => raw.trim(),
    };
    let value = ty.parse(text, line)?;
    interp.store.declare(name, ty, value, line)
}

pub(super) fn help(interp: &Interpreter) {
    let out = &interp.print_handler;
    out.println(&format!("Welcome to DeadBasic Version: {}", crate::VERSION));
    out.println("Commands are as follows.");
    for cmd in Command::ALL {
        out.println(&format!(" {}: {}", cmd.name(), cmd.summary()));
    }
    out.println("Declarations: int/long/double/str <name> <value>");
    out.println("Flow: if/else/endif, while/endwhile, try/catch [errVar]/endtry");
    out.println("Copyright 2025. Licensed under MIT.");
}
