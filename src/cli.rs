use clap::{Parser, Subcommand, ValueEnum};

use crate::models::Sex;

/// DietPlanner — estimates daily nutrient needs and picks a calorie-minimal day of meals.
#[derive(Parser, Debug)]
#[command(name = "diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(long, default_value = "foods.csv")]
    pub foods: String,

    /// Path to the historical reference CSV file.
    #[arg(long, default_value = "reference.csv")]
    pub reference: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate nutrient needs and pick a calorie-minimal day of meals.
    Plan {
        /// Sex to estimate for; prompted when absent.
        #[arg(long, value_enum)]
        sex: Option<SexArg>,

        /// Body weight in kilograms; prompted when absent.
        #[arg(long)]
        weight: Option<f64>,

        /// Number of consecutive days to plan; foods picked on one day are
        /// excluded from the next.
        #[arg(long, default_value_t = 1)]
        days: u32,

        /// Solver time limit in seconds per day.
        #[arg(long)]
        time_limit: Option<f64>,

        /// Print the plans as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// Estimate per-nutrient daily needs for a sex and body weight.
    Estimate {
        /// Sex to estimate for; prompted when absent.
        #[arg(long, value_enum)]
        sex: Option<SexArg>,

        /// Body weight in kilograms; prompted when absent.
        #[arg(long)]
        weight: Option<f64>,

        /// Print the estimate as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            sex: None,
            weight: None,
            days: 1,
            time_limit: None,
            json: false,
        }
    }
}

/// Command-line spelling of the two reference-table sexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SexArg {
    Female,
    Male,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Female => Sex::Female,
            SexArg::Male => Sex::Male,
        }
    }
}
