use chrono::{Local, NaiveDate};
use naljja::{Context, DateRange, parse_with};
use std::io::{self, Read};

/// The demo corpus: the kinds of report queries the parser is aimed at.
const EXAMPLE_QUERIES: &[&str] = &[
    "2024년 매출",
    "2024년 1분기 매출",
    "3개월치 매출",
    "2024년 1월부터 삼십개월 매출",
    "2024년 3월~6월 매출",
    "작년 4분기 매출",
    "4년 전 매출",
    "현재 매출",
    "올해 매출",
    "올해 상반기 매출",
    "올해 하반기 매출",
    "2024년도 상위 10개 상품의 매출",
    "2020년부터 삼개년 매출",
    "지난 3개년 매출",
    "지난 해 매출",
    "지난 분기 매출",
    "이번 연도 매출",
    "지난 달 1일부터 10일 간의 매출",
    "1년치 매출",
    "이 회사의 이번 달 매출",
];

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context { reference_date: config.reference_date };
    let inputs: Vec<String> = if config.examples {
        EXAMPLE_QUERIES.iter().map(|s| s.to_string()).collect()
    } else {
        vec![config.input.clone().unwrap_or_default()]
    };

    for input in &inputs {
        if let Err(err) = run_query(input, &ctx, config.json) {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run_query(input: &str, ctx: &Context, json: bool) -> Result<(), String> {
    let ranges = parse_with(input, ctx).map_err(|err| format!("error: {input}: {err}"))?;

    if json {
        let line = Report { text: input, ranges: &ranges };
        let out = serde_json::to_string(&line)
            .map_err(|err| format!("error: failed to encode ranges: {err}"))?;
        println!("{out}");
    } else {
        println!("{input}");
        if ranges.is_empty() {
            println!("  (no date expressions)");
        }
        for range in &ranges {
            println!("  {range}");
        }
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct Report<'a> {
    text: &'a str,
    ranges: &'a [DateRange],
}

struct CliConfig {
    input: Option<String>,
    reference_date: NaiveDate,
    json: bool,
    examples: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_date = Local::now().date_naive();
    let mut json = false;
    let mut examples = false;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("naljja {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--json" => json = true,
            "--examples" => examples = true,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_date = parse_reference(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                let value = arg.trim_start_matches("--reference=");
                reference_date = parse_reference(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    if examples {
        if input.is_some() {
            return Err("error: --examples does not take an input".to_string());
        }
    } else if input.is_none() {
        input = Some(read_stdin_input()?);
    }

    if !examples && input.as_deref().map(str::trim).unwrap_or("").is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, reference_date, json, examples })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DD)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "naljja {version}

Korean date-expression parser CLI: free-text queries in, calendar date
ranges out.

Usage:
  naljja [OPTIONS] [--] <input...>
  naljja [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  --reference <date>         Reference date in YYYY-MM-DD for relative
                             expressions. Default: today.
  --json                     Print one JSON object per query instead of text.
  --examples                 Run the built-in demo queries.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Parse error (invalid calendar date construction).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
