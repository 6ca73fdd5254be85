use std::f64::consts::PI;
use std::fs::File;
use std::io::{
    BufReader,
    BufWriter
};
use std::path::{
    Path,
    PathBuf
};
use std::process::ExitCode;
use std::sync::Arc;

use argh::FromArgs;
use log::LevelFilter;

use tabfunc::codec::binarycodec::{
    input_tabulated_function,
    output_tabulated_function
};
use tabfunc::codec::recordcodec::{
    read_record,
    write_record
};
use tabfunc::codec::textcodec::{
    read_tabulated_function,
    write_tabulated_function
};
use tabfunc::configuration::Configuration;
use tabfunc::function::function::Function;
use tabfunc::function::meta::functions;
use tabfunc::manager::manager::IManager;
use tabfunc::tabulated::tabulatedfunction::TabulatedFunction;
use tabfunc::tabulated::tabulator::{
    max_deviation,
    stepped,
    tabulate
};

const DEFAULT_CONFIG: &str = r#"{
    "function": [
        {"name": "sin", "type": "Sin"},
        {"name": "cos", "type": "Cos"},
        {"name": "exp", "type": "Exp"},
        {"name": "ln",  "type": "Log", "base": 2.718281828459045}
    ],
    "tabulation": [
        {"name": "sin_tab", "function": "sin", "left_x": 0.0, "right_x": 3.141592653589793, "points_count": 10},
        {"name": "cos_tab", "function": "cos", "left_x": 0.0, "right_x": 3.141592653589793, "points_count": 10},
        {"name": "exp_tab", "function": "exp", "left_x": 0.0, "right_x": 10.0, "points_count": 11},
        {"name": "ln_tab",  "function": "ln",  "left_x": 0.0, "right_x": 10.0, "points_count": 11}
    ]
}"#;

/// Tabulate, combine and persist sample functions.
#[derive(FromArgs)]
struct Opts {
    /// configuration file (built-in sample when omitted)
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// directory for the encoded files
    #[argh(option, short = 'o', default = "std::env::temp_dir()")]
    out_dir: PathBuf,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    log_level: LevelFilter,
}

type DemoResult = Result<(), Box<dyn std::error::Error>>;

fn compare_sin_cos(config: &Configuration) -> DemoResult {
    let sin = config.function_manager().get("sin")?;
    let cos = config.function_manager().get("cos")?;
    let sin_tab = config.tabulation_manager().get("sin_tab")?;
    let cos_tab = config.tabulation_manager().get("cos_tab")?;

    println!("exact vs tabulated sin / cos:");
    for x in stepped(0.0, PI, 0.1) {
        println!("x={:.1}: sin={:.6}(tab={:.6}) cos={:.6}(tab={:.6})",
                 x, sin.value(x), sin_tab.value(x), cos.value(x), cos_tab.value(x));
    }

    let sum_squares = functions::sum(
        functions::power(sin_tab, 2.0),
        functions::power(cos_tab, 2.0),
    );
    println!("\nsin^2 + cos^2:");
    for x in stepped(0.0, PI, 0.1) {
        println!("x={:.1}: {:.8}", x, sum_squares.value(x));
    }

    println!("\nmax error against point count:");
    for points_count in [5, 10, 20, 50] {
        let sin_tab: Arc<dyn Function> = Arc::new(tabulate(sin.as_ref(), 0.0, PI, points_count)?);
        let cos_tab: Arc<dyn Function> = Arc::new(tabulate(cos.as_ref(), 0.0, PI, points_count)?);
        let sum = functions::sum(functions::power(sin_tab, 2.0), functions::power(cos_tab, 2.0));
        let max_error = max_deviation(sum.as_ref(), 1.0, stepped(0.0, PI, 0.05));
        println!("points: {}, max error: {:.10}", points_count, max_error);
    }
    Ok(())
}

fn print_comparison(title: &str, original: &dyn TabulatedFunction, restored: &dyn TabulatedFunction) -> DemoResult {
    println!("\n{}:", title);
    for i in 0..original.points_count() {
        let x = original.point_x(i)?;
        println!("x={:.1}: {:.6} (original) vs {:.6} (restored)", x, original.point_y(i)?, restored.value(x));
    }
    Ok(())
}

fn round_trip_exp_as_text(config: &Configuration, out_dir: &Path) -> DemoResult {
    let exp_tab = config.tabulation_manager().get("exp_tab")?;
    let path = out_dir.join("exp.txt");
    write_tabulated_function(&*exp_tab, &mut BufWriter::new(File::create(&path)?))?;
    let restored = read_tabulated_function(&mut BufReader::new(File::open(&path)?))?;
    print_comparison("exp through text", &*exp_tab, &restored)
}

fn round_trip_ln_as_binary(config: &Configuration, out_dir: &Path) -> DemoResult {
    let ln_tab = config.tabulation_manager().get("ln_tab")?;
    let path = out_dir.join("log.dat");
    output_tabulated_function(&*ln_tab, &mut BufWriter::new(File::create(&path)?))?;
    let restored = input_tabulated_function(&mut BufReader::new(File::open(&path)?))?;
    print_comparison("ln through binary", &*ln_tab, &restored)
}

fn round_trip_composition_as_record(config: &Configuration, out_dir: &Path) -> DemoResult {
    let ln = config.function_manager().get("ln")?;
    let exp = config.function_manager().get("exp")?;
    let composition = functions::composition(ln, exp);
    let tabulated = tabulate(composition.as_ref(), 0.0, 10.0, 11)?;

    let path = out_dir.join("composition.rec");
    write_record(&tabulated, &mut BufWriter::new(File::create(&path)?))?;
    let restored = read_record(&mut BufReader::new(File::open(&path)?))?;

    println!("\nln(exp(x)) through record:");
    let mut all_match = true;
    for x in stepped(0.0, 10.0, 1.0) {
        let (lhs, rhs) = (tabulated.value(x), restored.value(x));
        let matches = (lhs - rhs).abs() < 1e-10;
        all_match &= matches;
        println!("x={:.1}: {:.6} vs {:.6} (match: {})", x, lhs, rhs, matches);
    }
    println!("all match: {}", all_match);
    Ok(())
}

fn run(opts: &Opts) -> DemoResult {
    let config = Configuration::new();
    match &opts.config {
        Some(path) => config.from_reader(path)?,
        None => config.from_json_str(DEFAULT_CONFIG)?
    }

    compare_sin_cos(&config)?;
    round_trip_exp_as_text(&config, &opts.out_dir)?;
    round_trip_ln_as_binary(&config, &opts.out_dir)?;
    round_trip_composition_as_record(&config, &opts.out_dir)?;
    Ok(())
}

fn main() -> ExitCode {
    let opts: Opts = argh::from_env();
    env_logger::Builder::new().filter_level(opts.log_level).init();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
