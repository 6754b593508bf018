use color_print::cprintln;
use sapasm::error::Error;
use sapasm::{codegen, collect, lexer, record, util};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "main.bin")]
    output: String,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// Print tokens of each line
    #[clap(short, long)]
    tokens: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SAP-8 Assembler");

    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(err) => {
            Error::LoadFailure(args.input.clone(), err).print_diag(&args.input, "");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&args, &source) {
        err.print_diag(&args.input, &source);
        std::process::exit(1);
    }
}

fn run(args: &Args, source: &str) -> Result<(), Error> {
    println!("1. Read File and Tokenize Lines");
    println!("  < {}", args.input);
    let lines = lexer::Lexer::new(source).parse()?;
    if args.tokens {
        util::print_tokens(&lines);
    }
    let records = record::classify_all(lines)?;

    println!("2. Collect Symbols");
    let idents = collect::collect(&records)?;
    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        let map = util::symbol_map(&idents)?;
        std::fs::write(path, map).map_err(|e| Error::FileWrite(path.clone(), e))?;
    }

    println!("3. Resolve Symbols & Generate Binary");
    let chunks = codegen::generate(&records, &idents)?;
    let bin = codegen::link(&chunks);
    println!("  > {}", &args.output);
    let mut file = std::fs::File::create(&args.output)
        .map_err(|e| Error::FileCreate(args.output.clone(), e))?;
    std::io::Write::write_all(&mut file, &bin)
        .map_err(|e| Error::FileWrite(args.output.clone(), e))?;

    if args.dump {
        util::print_dump(&args.input, &records, &idents, &chunks);
    }

    cprintln!(
        "<g,s>Finished</>: {} bytes, {} symbols",
        bin.len(),
        idents.len()
    );
    Ok(())
}
