//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{BenchmarkResult, EpisodeResult};
use colored::Colorize;

/// Print one finished episode
pub fn print_episode_result(index: usize, result: &EpisodeResult) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Episode {}: hidden word {}",
        index,
        result.hidden.text().to_uppercase().bright_yellow().bold()
    );

    for (turn, (guess, feedback)) in result.guesses.iter().enumerate() {
        println!(
            "  Turn {}: {} {}",
            turn + 1,
            guess.text().to_uppercase(),
            feedback.to_emoji()
        );
    }

    if result.invalid_attempts > 0 {
        println!(
            "  {}",
            format!("{} invalid words rejected", result.invalid_attempts).bright_black()
        );
    }

    let outcome = if result.won {
        format!("✅ Won in {} guesses (reward {:+.1})", result.turns(), result.reward)
            .green()
            .bold()
    } else {
        format!("❌ Lost (reward {:+.1})", result.reward).red().bold()
    };
    println!("  {outcome}");
}

/// Print the result of a benchmark or a multi-episode simulation
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Episodes:         {}", result.episodes);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Wins / losses:    {} / {}", result.wins, result.losses);
    println!("   Average reward:   {:+.3}", result.average_reward);
    if let Some(turns) = result.average_turns_on_win {
        println!("   Turns per win:    {turns:.2}");
    }
    println!("   Invalid words:    {}", result.invalid_attempts);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Episodes/second:  {:.1}", result.episodes_per_second);

    println!("\n📈 {}", "Wins by turn:".bright_cyan().bold());
    for (i, &count) in result.distribution.iter().enumerate() {
        let pct = if result.episodes > 0 {
            count as f64 / result.episodes as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
    }
}
