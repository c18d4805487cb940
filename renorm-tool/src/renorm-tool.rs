#![allow(clippy::uninlined_format_args)]

use renorm::{Exprs, NodeId};
use std::{fs, path::PathBuf, process};
use structopt::StructOpt;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, StructOpt)]
#[structopt(name = "renorm-tool")]
struct Opt {
    /// The expressions to normalize.
    #[structopt(conflicts_with = "file")]
    expressions: Vec<String>,

    /// Normalize each line of a specified file.
    #[structopt(long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Log every rewrite rule as it is applied, to stderr.
    #[structopt(long, short)]
    trace: bool,

    /// Dump the expression tree and the normal form tree to stdout.
    #[structopt(long)]
    dump_tree: bool,

    /// Print the parsed expression without normalizing it.
    #[structopt(long)]
    raw: bool,
}

fn init_logging(trace: bool) {
    let default_level = if trace { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(default_level.into()))
        .init();
}

fn show(exprs: &mut Exprs, id: NodeId, args: &Opt) {
    if args.dump_tree {
        println!("Expression tree:\n{}", exprs.display_tree(id));
    }
    if args.raw {
        println!("{}", exprs.display(id));
        return;
    }
    let nf = exprs.normal_form(id);
    if args.dump_tree {
        println!("Normal form tree:\n{}", exprs.display_tree(nf));
    }
    println!("{} --> {}", exprs.display(id), exprs.display(nf));
}

fn main() {
    let args = Opt::from_args();
    init_logging(args.trace);
    if args.trace {
        renorm::enable_trace();
    }

    let lines: Vec<String> = match args.file {
        Some(ref path) => match fs::read_to_string(path) {
            Ok(contents) => contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(err) => {
                println!("{}: {}", err, path.display());
                process::exit(1);
            }
        },
        None => args.expressions.clone(),
    };

    let mut exprs: Exprs = Exprs::new();
    for text in &lines {
        match exprs.parse(text) {
            Ok(id) => show(&mut exprs, id, &args),
            Err(err) => {
                println!("{}: {}", text, err);
                process::exit(1);
            }
        }
    }
}
