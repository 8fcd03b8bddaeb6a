use fastConvolve::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative tolerance for real-valued comparisons.
const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    expected: Vec<f64>,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    h: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    mode: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    direct: Vec<f64>,
    fft: Vec<f64>,
    integer_exact: Option<bool>,
    passed: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let input_dir = root.join("../reference");
    let output_dir = root.join("../output/fastConvolve");

    let entries = reference_cases(&input_dir)?;
    fs::create_dir_all(&output_dir)?;

    let mut failures = Vec::new();
    for path in entries {
        let data = process_file(&path, &output_dir)?;
        let status = if data.result.passed { "ok" } else { "FAILED" };
        println!("{:<28} {:>6}  ({})", data.name, status, data.notes);
        if !data.result.passed {
            failures.push(data.name);
        }
    }

    if failures.is_empty() {
        println!("All reference cases match.");
        Ok(())
    } else {
        Err(format!("reference mismatch: {}", failures.join(", ")).into())
    }
}

/// Sorted reference case files in `dir`.
///
/// A missing directory or one without any `.json` case is an error.
fn reference_cases(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if !dir.is_dir() {
        return Err(format!("reference directory {:?} does not exist", dir).into());
    }

    let mut cases: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    cases.sort();

    if cases.is_empty() {
        return Err(format!("no reference cases found in {:?}", dir).into());
    }
    Ok(cases)
}

fn parse_mode(name: &str) -> Result<ConvolveMode, Box<dyn Error>> {
    match name {
        "full" => Ok(Full),
        "same" => Ok(Same),
        "valid" => Ok(Valid),
        other => Err(format!("unknown mode {:?}", other).into()),
    }
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<ValidationData, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;
    let mode = parse_mode(&data.params.mode)?;

    let run = |method: ConvolveMethod| -> Result<Vec<f64>, ConvolveError> {
        let model = Convolve::new().mode(mode).method(method).build()?;
        Ok(model.convolve(&data.input.x, &data.input.h)?.values)
    };

    data.result.direct = run(Direct)?;
    data.result.fft = run(Fft)?;

    // Integral cases are also run through the exact integer path.
    data.result.integer_exact = match (as_integers(&data.input.x), as_integers(&data.input.h)) {
        (Some(x), Some(h)) => {
            let model = Convolve::new().mode(mode).method(Direct).build()?;
            let y = model.convolve(&x, &h)?.values;
            Some(
                y.len() == data.expected.len()
                    && y.iter().zip(&data.expected).all(|(&a, &b)| a as f64 == b),
            )
        }
        _ => None,
    };

    data.result.passed = matches(&data.result.direct, &data.expected)
        && matches(&data.result.fft, &data.expected)
        && data.result.integer_exact.unwrap_or(true);

    let file_name = input_path.file_name().ok_or("reference path has no file name")?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(data)
}

fn as_integers(values: &[f64]) -> Option<Vec<i64>> {
    values
        .iter()
        .map(|&v| (v.fract() == 0.0 && v.abs() < 1e15).then_some(v as i64))
        .collect()
}

fn matches(actual: &[f64], expected: &[f64]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, b)| (a - b).abs() <= TOLERANCE * b.abs().max(1.0))
}
