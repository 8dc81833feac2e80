use clap::Parser;
use patharg::OutputArg;
use std::error::Error;
use std::process::exit;
use waenc::types::{FieldType, Mut, PackType, ValType};
use waenc::{Instruction, InstructionList, LocalKind, ModuleBuilder};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to write the module. If not provided or is '-', write to
    /// standard output.
    #[arg(default_value_t)]
    pub output: OutputArg,

    /// Write the textual s-expression form instead of the binary encoding.
    #[arg(long, default_value_t = false)]
    pub text: bool,

    /// Enable verbose output, including encoder trace messages on standard
    /// error.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }

    let module = build_sample_module();

    if cli.text {
        let rendered = format!("{}\n", module.to_sexpr());
        cli.output
            .write(rendered)
            .unwrap_or_else(|e| abort("writing module text", e));
    } else {
        let bytes = module
            .encode_to_vec()
            .unwrap_or_else(|e| abort("encoding module", e));
        cli.output
            .write(bytes)
            .unwrap_or_else(|e| abort("writing module binary", e));
    }
}

/// A small module exercising the type factories and the seed instruction set:
/// an `add` function over two i32 parameters, a `clamped` function with an
/// if/else over a scratch local, and a pair of GC aggregate types.
fn build_sample_module() -> ModuleBuilder {
    let mut module = ModuleBuilder::new();

    let binop = module.make_func_type(ValType::I32);
    module.push_param(binop, ValType::I32);
    module.push_param(binop, ValType::I32);

    let pair = module.make_struct_type();
    module.push_field(pair, FieldType::of_val(ValType::I32, Mut::Var));
    module.push_field(pair, FieldType::of_val(ValType::I64, Mut::Const));
    module.make_array_of_packed(PackType::I8, Mut::Const);

    let add = module.add_function("add", binop);
    let function = module.function_mut(add);
    let lhs = function.add_local(LocalKind::Param, ValType::I32, "lhs");
    let rhs = function.add_local(LocalKind::Param, ValType::I32, "rhs");
    let body = function.make_body();
    body.push(Instruction::LocalGet(lhs));
    body.push(Instruction::LocalGet(rhs));
    body.push(Instruction::I32Add);

    let clamped = module.add_function("clamped", binop);
    let function = module.function_mut(clamped);
    let lhs = function.add_local(LocalKind::Param, ValType::I32, "lhs");
    function.add_local(LocalKind::Param, ValType::I32, "rhs");
    let out = function.add_local(LocalKind::Local, ValType::I32, "out");
    let then = InstructionList::from_iter([Instruction::I32Const(100), Instruction::LocalSet(out)]);
    let otherwise =
        InstructionList::from_iter([Instruction::LocalGet(lhs), Instruction::LocalSet(out)]);
    let body = function.make_body();
    body.push(Instruction::LocalGet(lhs));
    body.push(Instruction::If(then, otherwise));
    body.push(Instruction::LocalGet(out));

    module
}

// One line per failure, with the cause chain flattened behind it. Details beyond
// this live in the tracing output that --verbose enables.
fn abort<T>(context: &str, err: impl Error) -> T {
    eprint!("waenc: {context}: {err}");
    let mut cause = err.source();
    while let Some(c) = cause {
        eprint!(": {c}");
        cause = c.source();
    }
    eprintln!();

    exit(1)
}
