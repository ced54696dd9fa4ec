use std::env;
use std::time::Instant;

use dp_replay::problems::{Fibonacci, FrogJump, HouseRobber, Problem};
use dp_replay::{ProblemKind, Strategy};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("trace_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    init_tracing();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("DP Replay Probe: answers, trace sizes and cost per strategy");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Every scenario is solved with each selected strategy and checked");
    eprintln!("against an independent baseline.");
    eprintln!();
    eprintln!("Columns:");
    eprintln!("  • steps: number of trace records the solve emitted");
    eprintln!("  • nodes: call nodes (0 for tabulation)");
    eprintln!("  • wall_s: wall-clock time of the solve in seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let problems: Vec<ProblemKind> = ProblemKind::ALL
        .into_iter()
        .filter(|p| options.problem.map_or(true, |only| only == *p))
        .collect();

    for (idx, kind) in problems.iter().enumerate() {
        eprintln!("[{}/{}] {}...", idx + 1, problems.len(), kind.title());
        for (problem, desc, baseline) in scenarios(*kind) {
            for strategy in Strategy::ALL {
                if options.strategy.is_some_and(|only| only != strategy) {
                    continue;
                }
                let m = measure(&problem, desc.clone(), strategy, baseline, &mut sys);
                eprintln!(
                    "      {} {:<12} {:<28} answer={} steps={} nodes={} time={:.4}s",
                    m.status.icon(),
                    strategy.id(),
                    m.input,
                    m.answer,
                    m.steps,
                    m.nodes,
                    m.wall_s
                );
                measurements.push(m);
            }
        }
        eprintln!();
    }

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("trace_probe output error: {err}");
        std::process::exit(1);
    }
    if measurements.iter().any(|m| m.status == Status::Failed) {
        std::process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dp_replay=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

struct Options {
    format: OutputFormat,
    problem: Option<ProblemKind>,
    strategy: Option<Strategy>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut problem = None;
        let mut strategy = None;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = || -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {flag}")),
                }
            };
            match flag.as_str() {
                "--format" => format = OutputFormat::from_str(&value()?)?,
                "--problem" => problem = Some(value()?.parse().map_err(|e| format!("{e}"))?),
                "--strategy" => strategy = Some(value()?.parse().map_err(|e| format!("{e}"))?),
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(Self {
            format,
            problem,
            strategy,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin trace_probe [-- <options>]

Options:
  --format <csv|table|json>                        Output format (default: csv)
  --problem <fibonacci|house-robber|frog-jump>     Only probe one problem
  --strategy <recursive|memoization|tabulation>    Only probe one strategy
  -h, --help                                       Print this help message

Set RUST_LOG=dp_replay=debug to see solve and playback events."
        );
    }
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected csv, table or json)")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Serialize)]
struct Measurement {
    problem: ProblemKind,
    strategy: Strategy,
    input: String,
    answer: i64,
    expected: i64,
    steps: usize,
    nodes: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    status: Status,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Status {
    Passed,
    Failed,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Status::Passed => "✓",
            Status::Failed => "✗",
        }
    }
}

fn scenarios(kind: ProblemKind) -> Vec<(Problem, String, i64)> {
    match kind {
        ProblemKind::Fibonacci => [1usize, 5, 7, 10, 15, 20]
            .into_iter()
            .map(|n| (Fibonacci::new(n).into(), format!("n={n}"), fib_baseline(n)))
            .collect(),
        ProblemKind::HouseRobber => {
            let cases: [&[i64]; 5] = [
                &[2, 7, 9, 3, 1],
                &[1, 2, 3, 1],
                &[6],
                &[0, 0, 0],
                &[5, 5, 10, 100, 10, 5, 5],
            ];
            cases
                .into_iter()
                .map(|h| {
                    (
                        HouseRobber::new(h.to_vec()).into(),
                        format!("houses={h:?}"),
                        rob_baseline(h),
                    )
                })
                .collect()
        }
        ProblemKind::FrogJump => {
            let cases: [(&[i64], usize); 5] = [
                (&[10, 5, 20, 0, 15], 2),
                (&[15, 4, 1, 14, 15], 3),
                (&[7], 1),
                (&[30, 10, 60, 10, 60, 50], 1),
                (&[1, 100, 1, 100, 1, 100, 1], 4),
            ];
            cases
                .into_iter()
                .map(|(h, k)| {
                    (
                        FrogJump::new(h.to_vec(), k).into(),
                        format!("heights={h:?} k={k}"),
                        frog_baseline(h, k),
                    )
                })
                .collect()
        }
    }
}

fn measure(
    problem: &Problem,
    input: String,
    strategy: Strategy,
    expected: i64,
    sys: &mut System,
) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let solution = problem.solve(strategy);
    let duration = start.elapsed();
    let after = rss_kib(sys);

    let answer = solution.answer();
    Measurement {
        problem: problem.kind(),
        strategy,
        input,
        answer,
        expected,
        steps: solution.trace().len(),
        nodes: solution.graph().map_or(0, |g| g.len()),
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        status: if answer == expected {
            Status::Passed
        } else {
            Status::Failed
        },
    }
}

fn print_summary(measurements: &[Measurement]) {
    let failed = measurements
        .iter()
        .filter(|m| m.status == Status::Failed)
        .count();

    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    for strategy in Strategy::ALL {
        let ms: Vec<_> = measurements
            .iter()
            .filter(|m| m.strategy == strategy)
            .collect();
        if ms.is_empty() {
            continue;
        }
        let max_steps = ms.iter().map(|m| m.steps).max().unwrap_or(0);
        let total_time: f64 = ms.iter().map(|m| m.wall_s).sum();
        eprintln!(
            "  {:<12} runs={} max_steps={} total_time={:.4}s",
            strategy.id(),
            ms.len(),
            max_steps,
            total_time
        );
    }
    eprintln!();
    if failed == 0 {
        eprintln!("✓ All strategies matched their baselines.");
    } else {
        eprintln!("✗ {failed} run(s) disagreed with the baseline.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("problem,strategy,input,answer,expected,steps,nodes,wall_s,rss_delta_kib,status");
    for m in measurements {
        println!(
            "{},{},\"{}\",{},{},{},{},{:.6},{},{}",
            m.problem,
            m.strategy,
            m.input,
            m.answer,
            m.expected,
            m.steps,
            m.nodes,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label()
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    println!(
        "{:<13} {:<12} {:<36} {:>7} {:>7} {:>7} {:>10} {:>8}",
        "problem", "strategy", "input", "answer", "steps", "nodes", "wall_s", "status"
    );
    println!("{}", "-".repeat(108));
    for m in measurements {
        println!(
            "{:<13} {:<12} {:<36} {:>7} {:>7} {:>7} {:>10.6} {:>8}",
            m.problem.id(),
            m.strategy.id(),
            m.input,
            m.answer,
            m.steps,
            m.nodes,
            m.wall_s,
            m.status.label()
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let out = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

fn fib_baseline(n: usize) -> i64 {
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

/// Best sum over all subsets with no two adjacent indices.
fn rob_baseline(houses: &[i64]) -> i64 {
    let n = houses.len();
    (0u32..1 << n)
        .filter(|mask| mask & (mask >> 1) == 0)
        .map(|mask| {
            (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| houses[i])
                .sum::<i64>()
        })
        .max()
        .unwrap_or(0)
}

/// Forward relaxation: push each step's cost to the next `k` steps.
fn frog_baseline(heights: &[i64], k: usize) -> i64 {
    let n = heights.len();
    let mut best = vec![i64::MAX; n];
    best[0] = 0;
    for i in 0..n {
        for j in i + 1..n.min(i + k + 1) {
            let cand = best[i] + (heights[j] - heights[i]).abs();
            if cand < best[j] {
                best[j] = cand;
            }
        }
    }
    best[n - 1]
}
