use std::fs::OpenOptions;
use std::path::PathBuf;

use clap::Parser;
use crossterm::style::Stylize;
use log::info;

use truth_table::assignment::{row_count, variables};
use truth_table::table::{TableConfig, TruthTable};

/// Classical laws printed when no formula is given. Each one is a tautology.
const LAWS: &[&str] = &[
    "(p ∨ q) ⇔ (q ∨ p)",
    "(p ∧ q) ⇔ (q ∧ p)",
    "(p ∧ (q ∧ r)) ⇔ ((p ∧ q) ∧ r)",
    "(p ∨ (q ∧ r)) ⇔ ((p ∨ q) ∧ (p ∨ r))",
    "(p ∧ (q ∨ r)) ⇔ ((p ∧ q) ∨ (p ∧ r))",
    "(p ∨ p) ⇔ (p)",
    "(p ∧ p) ⇔ (p)",
    "(¬(¬p)) ⇔ (p)",
    "(p ⇒ q) ⇔ (¬p ∨ q)",
    "(¬(p ∧ q)) ⇔ (¬p ∨ ¬q)",
    "(¬(p ∨ q)) ⇔ (¬p ∧ ¬q)",
    "(p ⇔ q) ⇔ ((p ⇒ q) ∧ (q ⇒ p))",
];

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Formulas to tabulate (defaults to a list of classical laws).
    #[arg(value_name = "FORMULA")]
    formulas: Vec<String>,

    /// Append the tables to a CSV file instead of printing them.
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Show a column for every sub-expression, not only the output.
    #[arg(long)]
    all: bool,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,

    /// Refuse formulas with more variables than this.
    #[arg(long, value_name = "INT", default_value = "16")]
    max_vars: usize,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    info!("args = {:?}", args);

    let formulas: Vec<String> = if args.formulas.is_empty() {
        LAWS.iter().map(|s| s.to_string()).collect()
    } else {
        args.formulas.clone()
    };

    let config = TableConfig {
        show_subexpressions: args.all,
        ..TableConfig::default()
    };

    for formula in &formulas {
        let (count, _) = variables(formula);
        if count > args.max_vars {
            color_eyre::eyre::bail!(
                "'{}' has {} variables ({} rows), more than --max-vars={}",
                formula,
                count,
                row_count(count),
                args.max_vars
            );
        }

        let table = TruthTable::new(formula)?;
        info!("'{}' -> {}", formula, table.postfix());

        match &args.csv {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                table.write_csv(file)?;
                info!("appended '{}' to {}", formula, path.display());
            }
            None => {
                print_table(&table, &config, !args.no_color);
                println!("{} is a {}", formula, table.satisfiability());
                println!();
            }
        }
    }

    Ok(())
}

fn print_table(table: &TruthTable, config: &TableConfig, color: bool) {
    let text = table.to_text_with_config(config);
    if !color {
        print!("{}", text);
        return;
    }

    // Header and rule as rendered, result cells coloured.
    for line in text.lines().take(2) {
        println!("{}", line);
    }
    for row in table.rows() {
        for value in row.assignment.values() {
            print!("{}\t", config.symbol(value));
        }
        let cells = if config.show_subexpressions {
            row.values.clone()
        } else {
            vec![row.output()]
        };
        let cells: Vec<String> = cells
            .into_iter()
            .map(|value| match value {
                true => config.symbol(value).green().to_string(),
                false => config.symbol(value).red().to_string(),
            })
            .collect();
        println!("| {}", cells.join("\t"));
    }
}
