use std::env;
use std::fs;

use chart_layout::{convert_to_text, PositionedChar, COLUMN_SEPARATOR};
use chart_model::{convert_elapsed_time, splits, Fractional};

fn print_usage() {
    eprintln!(
        "Usage: chart-textdump CHARS_JSON [--splits TIMES_PATH] [--require-times]\n\
         Examples:\n\
           chart-textdump ./page.json\n\
           chart-textdump ./page.json --splits ./times.txt --require-times\n\
         CHARS_JSON is a JSON array of positioned characters, e.g.\n\
           [{{\"glyph\":\"A\",\"x\":0.0,\"y\":0.0,\"width\":5.0}}, ...]\n\
         TIMES_PATH holds one `label feet [millis]` line per fractional."
    );
}

fn load_chars(path: &str) -> Result<Vec<PositionedChar>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let chars: Vec<PositionedChar> = serde_json::from_str(&raw)?;
    Ok(chars)
}

fn load_fractionals(path: &str) -> Result<Vec<Fractional>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let mut out: Vec<Fractional> = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let label = parts
            .next()
            .ok_or(format!("line {}: missing label", index + 1))?;
        let feet: i32 = parts
            .next()
            .ok_or(format!("line {}: missing feet", index + 1))?
            .parse()?;
        let millis: Option<i64> = match parts.next() {
            Some(raw_millis) => Some(raw_millis.parse()?),
            None => None,
        };
        out.push(Fractional::with_time(
            out.len() as i32 + 1,
            label,
            label,
            feet,
            convert_elapsed_time(millis),
            millis,
        ));
    }
    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args[0] == "--help" {
        print_usage();
        return Ok(());
    }

    let chars_path = &args[0];
    let mut times_path: Option<&str> = None;
    let mut require_times = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--splits" => {
                i += 1;
                times_path = Some(
                    args.get(i)
                        .map(String::as_str)
                        .ok_or("--splits needs a path")?,
                );
            }
            "--require-times" => require_times = true,
            other => {
                eprintln!("unknown argument: {other}");
                print_usage();
                return Ok(());
            }
        }
        i += 1;
    }

    let chars = load_chars(chars_path)?;
    let text = convert_to_text(&chars);
    println!("{text}");
    for (number, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
        if fields.len() > 1 {
            println!("line {} splits into {} fields: {:?}", number + 1, fields.len(), fields);
        }
    }

    if let Some(path) = times_path {
        let fractionals = load_fractionals(path)?;
        let mut prev: Option<&Fractional> = None;
        for fractional in &fractionals {
            let split = splits::calculate(prev, Some(fractional))?;
            if require_times {
                split.require_time_and_millis()?;
            }
            println!("{}", serde_json::to_string(&split)?);
            prev = Some(fractional);
        }
    }

    Ok(())
}
