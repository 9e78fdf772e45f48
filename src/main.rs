mod debug_report;

use regcomp::{Options, Pattern, Piece, compose_unicode_with, compose_with, named_capture, or};
use std::collections::BTreeMap;
use std::io::{self, IsTerminal};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let defined = match define_all(&config) {
        Ok(defined) => defined,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    debug_report::print_run(&defined, config.input.as_deref(), config.color);
}

/// One `--def`, `--capture` or `--or` argument, in command-line order.
enum Definition {
    Template { name: String, template: String },
    Capture { name: String, template: String },
    Alternation { name: String, operands: Vec<String> },
}

struct CliConfig {
    definitions: Vec<Definition>,
    input: Option<String>,
    unicode: bool,
    options: Options,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut definitions = Vec::new();
    let mut input: Option<String> = None;
    let mut unicode = false;
    let mut options = Options::default();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |what: &str| -> Result<String, String> {
            inline.clone().or_else(|| args.next()).ok_or_else(|| format!("error: {what} expects a value"))
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("regcomp {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-u" | "--unicode" => unicode = true,
            "--def" | "-d" => {
                let (name, template) = split_definition(&value("--def")?)?;
                definitions.push(Definition::Template { name, template });
            }
            "--capture" | "-c" => {
                let (name, template) = split_definition(&value("--capture")?)?;
                definitions.push(Definition::Capture { name, template });
            }
            "--or" => {
                let (name, operands) = split_definition(&value("--or")?)?;
                let operands = operands.split(',').map(|s| s.trim().to_string()).collect();
                definitions.push(Definition::Alternation { name, operands });
            }
            "--input" | "-i" => {
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value("--input")?);
            }
            "--size-limit" => {
                let raw = value("--size-limit")?;
                options.size_limit = raw.parse().map_err(|_| format!("error: invalid --size-limit '{raw}'"))?;
            }
            "--nest-limit" => {
                let raw = value("--nest-limit")?;
                options.nest_limit = raw.parse().map_err(|_| format!("error: invalid --nest-limit '{raw}'"))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'\n\nRun with --help for usage."));
            }
            _ => {
                let (name, template) = split_definition(&arg)?;
                definitions.push(Definition::Template { name, template });
            }
        }
    }

    if definitions.is_empty() {
        return Err("error: no pattern defined\n\nRun with --help for usage.".to_string());
    }

    Ok(CliConfig { definitions, input, unicode, options, color })
}

fn split_definition(raw: &str) -> Result<(String, String), String> {
    let (name, body) = raw.split_once('=').ok_or_else(|| format!("error: expected NAME=VALUE, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("error: missing name in '{raw}'"));
    }
    Ok((name.to_string(), body.to_string()))
}

/// Build every definition in order; later ones may reference earlier ones.
fn define_all(config: &CliConfig) -> Result<Vec<(String, Pattern)>, String> {
    let mut defined: BTreeMap<String, Pattern> = BTreeMap::new();
    let mut order = Vec::new();

    for definition in &config.definitions {
        let (name, pattern) = match definition {
            Definition::Template { name, template } => (name, build_template(template, &defined, config)?),
            Definition::Capture { name, template } => {
                let inner = build_template(template, &defined, config)?;
                (name, named_capture(name, &inner).map_err(|err| format!("error: {name}: {err}"))?)
            }
            Definition::Alternation { name, operands } => {
                let patterns = operands
                    .iter()
                    .map(|operand| lookup(operand, &defined))
                    .collect::<Result<Vec<_>, _>>()?;
                (name, or(patterns).map_err(|err| format!("error: {name}: {err}"))?)
            }
        };
        defined.insert(name.clone(), pattern.clone());
        order.push((name.clone(), pattern));
    }

    Ok(order)
}

fn lookup<'a>(name: &str, defined: &'a BTreeMap<String, Pattern>) -> Result<&'a Pattern, String> {
    defined.get(name).ok_or_else(|| format!("error: unknown pattern '{name}'"))
}

/// Split `template` on `${name}` references and compose it.
fn build_template(template: &str, defined: &BTreeMap<String, Pattern>, config: &CliConfig) -> Result<Pattern, String> {
    let mut fragments = Vec::new();
    let mut values = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| format!("error: unterminated reference in '{template}'"))?;
        fragments.push(&rest[..start]);
        values.push(Piece::from(lookup(&after[..end], defined)?));
        rest = &after[end + 1..];
    }
    fragments.push(rest);

    let built = if config.unicode {
        compose_unicode_with(&fragments, &values, &config.options)
    } else {
        compose_with(&fragments, &values, &config.options)
    };
    built.map_err(|err| format!("error: {err}"))
}

fn print_help() {
    println!(
        "\
regcomp {version}

Compose a regular expression from named templates and inspect the result.

USAGE:
  regcomp [OPTIONS] NAME=TEMPLATE...
  regcomp --def digit='[0-9]' --def num='${{digit}}+' --input 'abc 123'

Templates are literal text; ${{name}} splices an earlier definition in. A
template written as /body/flags applies those flags. The last definition is
the one reported.

OPTIONS:
  -d, --def NAME=TEMPLATE       Define a pattern from a template
  -c, --capture NAME=TEMPLATE   Define a named capture group NAME around TEMPLATE
      --or NAME=A,B,...         Define NAME as an alternation of earlier patterns
  -i, --input TEXT              Match the final pattern against TEXT
  -u, --unicode                 Force unicode mode on every template
      --size-limit BYTES        Compiled program size limit
      --nest-limit DEPTH        Maximum nesting depth
      --color                   Force colored output
      --no-color                Disable colored output
  -h, --help                    Print help
  -V, --version                 Print version

ENV:
  REGCOMP_DEBUG=1               Print composition traces to stderr
",
        version = env!("CARGO_PKG_VERSION")
    );
}
