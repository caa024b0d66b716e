use std::{fs, process};

use clap::Parser;
use fdnorm_cli::{report, App, Command, InputArgs, SchemaFile, Target};
use fdnorm_core::Schema;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Generate(args) => generate(args),
        Command::Analyze(args) => analyze(args),
        Command::Closure(args) => closure(args),
        Command::Keys(args) => keys(args),
        Command::Cover(args) => cover(args),
        Command::NormalForm(args) => normal_form(args),
        Command::Decompose(args) => decompose(args),
        Command::Fmt(args) => fmt(args),
        Command::Schema => schema(),
    }
}

fn load(args: &InputArgs) -> Schema<String> {
    fdnorm_cli::load_schema(&args.input).unwrap_or_else(|e| {
        eprintln!("{}: {e}", args.input.display());
        process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize output: {e}");
        process::exit(1);
    });
    println!("{rendered}");
}

fn generate(args: &fdnorm_cli::GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let schemas = fdnorm_testgen::generator::generate_mult_schemas(
        args.n_schema,
        args.n_attribute,
        args.n_dependency,
        args.max_lhs,
        args.seed,
    )
    .unwrap_or_else(|e| {
        eprintln!("Failed to generate schemas: {e}");
        process::exit(1);
    });

    for generated in &schemas {
        let path = args.output_dir.join(format!("{}.json", generated.get_id()));
        let file = fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::to_writer_pretty(file, generated.get_data()).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} schemas to {}",
        schemas.len(),
        args.output_dir.display()
    );
}

fn analyze(args: &InputArgs) {
    let schema = load(args);
    if args.json {
        print_json(&report::analysis_json(&schema));
    } else {
        print!("{}", report::analysis_text(&schema));
    }
}

fn closure(args: &fdnorm_cli::ClosureArgs) {
    let schema = load(&args.input);
    if args.input.json {
        let value = report::closure_json(&schema, &args.attrs).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        });
        print_json(&value);
    } else {
        let text = report::closure_text(&schema, &args.attrs).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        });
        println!("{text}");
    }
}

fn keys(args: &InputArgs) {
    let schema = load(args);
    if args.json {
        print_json(&report::keys_json(&schema));
    } else {
        print!("{}", report::keys_text(&schema));
    }
}

fn cover(args: &fdnorm_cli::CoverArgs) {
    let cover = load(&args.input).minimal_cover(args.union);
    if args.input.json {
        print_json(&cover);
    } else {
        println!("{cover}");
    }
}

fn normal_form(args: &InputArgs) {
    let schema = load(args);
    if args.json {
        print_json(&report::normal_form_json(&schema));
    } else {
        print!("{}", report::normal_form_text(&schema));
    }
}

fn decompose(args: &fdnorm_cli::DecomposeArgs) {
    let schema = load(&args.input);
    let decomposition = match args.into {
        Target::ThreeNf => schema.three_nf_synthesis(),
        Target::Bcnf => schema.bcnf_decomposition(),
    };
    if args.input.json {
        print_json(&report::decomposition_json(&decomposition));
    } else {
        print!("{decomposition}");
    }
}

fn fmt(args: &fdnorm_cli::FmtArgs) {
    let files = fdnorm_cli::collect_fd_files(&args.paths).unwrap_or_else(|e| {
        eprintln!("Failed to read input directory: {e}");
        process::exit(1);
    });
    if files.is_empty() {
        eprintln!("No .fd files found");
        process::exit(1);
    }

    let mut any_failed = false;
    for path in files {
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read {}: {e}", path.display());
                any_failed = true;
                continue;
            }
        };
        let schema = match fdnorm_parser::parse_schema(&contents) {
            Ok(schema) => schema,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                any_failed = true;
                continue;
            }
        };
        let formatted = fdnorm_core::format_schema(&schema);
        if formatted == contents {
            continue;
        }
        if args.check {
            println!("{}: not formatted", path.display());
            any_failed = true;
        } else if let Err(e) = fs::write(&path, formatted) {
            eprintln!("Failed to write {}: {e}", path.display());
            any_failed = true;
        } else {
            println!("Formatted {}", path.display());
        }
    }

    if any_failed {
        process::exit(1);
    }
}

fn schema() {
    print_json(&schemars::schema_for!(SchemaFile));
}
