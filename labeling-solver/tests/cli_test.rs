#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the solver with `args` and returns the lines it printed.
fn run_solver(test_name: &str, args: &[&str]) -> Vec<String> {
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_labeling-solver"));
    let log_file_path =
        PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(format!("{test_name}.log"));

    let mut child = Command::new(solver)
        .args(args)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) if status.success() => {}
        Ok(Some(status)) => panic!("solver exited with {status}"),
        Err(e) => panic!("error starting solver: {e}"),
    }

    let output = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    std::fs::remove_file(log_file_path).expect("Failed to remove log file.");
    output.lines().map(str::to_owned).collect()
}

fn value_after(line: &str, prefix: &str) -> i32 {
    line.strip_prefix(prefix)
        .unwrap_or_else(|| panic!("expected '{prefix}', got '{line}'"))
        .trim()
        .parse()
        .unwrap_or_else(|e| panic!("expected a number after '{prefix}' in '{line}': {e}"))
}

#[test]
fn seating_reports_improving_costs_then_the_optimum() {
    let lines = run_solver("seating_input1", &["--instance", "input1"]);

    let blocks = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with("Cost is"))
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    assert!(!blocks.is_empty(), "no solution was reported: {lines:?}");

    let mut costs = Vec::new();
    for &start in &blocks {
        let cost = value_after(&lines[start], "Cost is");
        let _ = value_after(&lines[start + 1], "Total node search count:");
        let _ = value_after(&lines[start + 2], "Wrong decisions:");
        assert!(lines[start + 3].starts_with("guest1="), "{}", lines[start + 3]);
        assert!(lines[start + 3].ends_with(&format!("cost={cost}")), "{}", lines[start + 3]);
        assert_eq!("---------------", lines[start + 4]);
        costs.push(cost);
    }
    assert!(costs.windows(2).all(|pair| pair[1] < pair[0]), "{costs:?}");

    let optimum = lines
        .iter()
        .position(|line| line == "*** Optimal seating found")
        .expect("the search proves optimality");
    assert!(optimum > blocks[blocks.len() - 1]);
    assert!(lines[optimum + 1].starts_with("Solution: guest1="));

    let best_cost = costs[costs.len() - 1];
    assert_eq!(17 - best_cost, value_after(&lines[optimum + 2], "Satisfied preferences:"));
}

#[test]
fn grid_prints_its_rows() {
    let lines = run_solver("grid_grid1_satisfy", &["--instance", "grid1", "--satisfy"]);

    let found = lines
        .iter()
        .position(|line| line == "*** Grid found")
        .expect("a grid is found");
    let score = value_after(&lines[found + 1], "Score:");

    let rows = &lines[found + 2..found + 7];
    let cells = rows
        .iter()
        .map(|row| {
            row.split(' ')
                .map(|cell| cell.parse::<i32>().expect("cells are fixed"))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    assert!(cells.iter().all(|row| row.len() == 5));
    assert_eq!(12, cells.iter().flatten().sum::<i32>());

    let points = [-5, -4, -3, 3, 4, 5];
    let row_score = cells
        .iter()
        .map(|row| points[row.iter().sum::<i32>() as usize])
        .sum::<i32>();
    let column_score = (0..5)
        .map(|column| points[cells.iter().map(|row| row[column]).sum::<i32>() as usize])
        .sum::<i32>();
    assert_eq!(row_score + column_score, score);
}
