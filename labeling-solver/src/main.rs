mod instances;
mod result;

use std::io::Write;

use clap::Parser;
use instances::DemoInstance;
use labeling_core::branching::ChoicePointStrategy;
use labeling_core::convert_case::Case;
use labeling_core::optimisation::OptimisationDirection;
use labeling_core::search::DepthFirstSearch;
use labeling_core::search::SearchMode;
use labeling_core::search::SearchOptions;
use labeling_core::search::SearchResult;
use labeling_core::search::SolutionReport;
use labeling_core::search::SolutionReporter;
use labeling_core::statistics::configure_statistic_logging;
use labeling_core::Store;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::LabelingResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about
)]
struct Args {
    /// The built-in instance to solve.
    #[arg(long, value_enum, default_value_t)]
    instance: DemoInstance,

    /// The largest number of chairs between two guests for which their preference is met. Only
    /// used by the seating instances.
    #[arg(long, default_value_t = 1)]
    max_diff: i32,

    /// How the search selects the variable to branch on and splits its domain.
    #[arg(long, value_enum, default_value_t)]
    strategy: ChoicePointStrategy,

    /// Whether to minimise the number of unmet preferences (the default) or to maximise the number
    /// of met preferences. Both lead to the same optimal seating. The grid score is always
    /// maximised.
    #[arg(long, value_enum)]
    direction: Option<OptimisationDirection>,

    /// Stop at the first seating instead of optimising.
    #[arg(long, conflicts_with = "all_solutions")]
    satisfy: bool,

    /// Report every seating instead of optimising.
    #[arg(short = 'a', long = "all-solutions")]
    all_solutions: bool,

    /// Enables log message output from the solver.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Logs every node of the search tree with the domains of the remaining variables.
    ///
    /// Implies `--verbose`.
    #[arg(long = "trace")]
    trace: bool,

    /// Enables logging of statistics once the search finishes.
    #[arg(short = 's', long = "log-statistics")]
    log_statistics: bool,
}

/// Prints every reported solution in the block format of the labelling search.
#[derive(Debug)]
struct SolutionPrinter {
    direction: OptimisationDirection,
}

impl SolutionReporter for SolutionPrinter {
    fn on_solution(&mut self, report: &SolutionReport<'_>) {
        if let Some(objective_value) = report.objective_value {
            println!("{}", objective_line(self.direction, objective_value));
        }
        println!("Total node search count: {}", report.num_nodes);
        println!("Wrong decisions: {}", report.num_wrong_decisions);
        println!(
            "{}",
            report
                .variables
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );
        println!("---------------");
    }
}

/// A minimised objective is reported as a cost, a maximised one as a score.
fn objective_line(direction: OptimisationDirection, objective_value: i32) -> String {
    match direction {
        OptimisationDirection::Minimise => format!("Cost is {objective_value}"),
        OptimisationDirection::Maximise => format!("Score is {objective_value}"),
    }
}

fn configure_logging(verbose: bool, trace: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("%%%stat:", Some("%%%stat-end"), Some(Case::Camel), None);
    }

    let level_filter = if trace {
        LevelFilter::Trace
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "[{}] {}", record.level(), record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> LabelingResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.trace, args.log_statistics)?;

    if labeling_core::asserts::LABELING_ASSERT_LEVEL_DEFINITION
        >= labeling_core::asserts::LABELING_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            labeling_core::asserts::LABELING_ASSERT_LEVEL_DEFINITION
        );
    }

    let mut store = Store::default();
    let model = args.instance.build(&mut store, args.max_diff)?;
    info!(
        "Solving {} with {} decision variables",
        args.instance,
        model.decision_variables().len()
    );

    let (objective, direction) = model.objective(args.direction);
    let mode = if args.satisfy {
        SearchMode::Satisfy
    } else if args.all_solutions {
        SearchMode::Enumerate
    } else {
        SearchMode::Optimise {
            objective,
            direction,
        }
    };

    let options = SearchOptions {
        strategy: args.strategy,
        mode,
        reported_variables: model.reported_variables(),
    };

    let mut search = DepthFirstSearch::new(options, SolutionPrinter { direction });
    let result = search.label(&mut store, model.decision_variables());

    match &result {
        SearchResult::Satisfiable(solution) | SearchResult::Optimal { solution, .. } => {
            if matches!(result, SearchResult::Optimal { .. }) {
                println!("\n*** Optimal {} found", model.kind());
            } else {
                println!("\n*** {} found", capitalise(model.kind()));
            }
            for line in model.describe(&store, solution) {
                println!("{line}");
            }
        }
        SearchResult::Unsatisfiable => println!("No {} satisfies the constraints.", model.kind()),
    }

    search.statistics().log();

    Ok(())
}
