//! Display functions for command results

use crate::commands::SimulationResult;
use colored::Colorize;

/// Print the aggregated results of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Wins:             {} ({:.1}%)",
        result.wins,
        result.win_rate * 100.0
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Average score:    {:.1}", result.average_score);
    println!("   Total score:      {}", result.total_score);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.attempt_distribution.is_empty() {
        return;
    }

    println!("\n{}", "Attempts to win:".bright_cyan().bold());
    let mut attempts: Vec<_> = result.attempt_distribution.iter().collect();
    attempts.sort_by_key(|(used, _)| **used);

    for (used, &count) in attempts {
        let pct = (count as f64 / result.rounds as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {used:>2}: {bar} {count:5} ({pct:5.1}%)");
    }
}
