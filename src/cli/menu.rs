use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use super::view::{TOP_RECOMMENDATIONS, failure_message, render_budget, render_report};
use crate::error::AppResult;
use crate::pipeline::Pipeline;

const OPTIONS: [&str; 4] = [
    "Enter New Project Description",
    "Run Complete Cost Analysis (Pipeline)",
    "View Recommendations",
    "Exit",
];

pub struct Menu {
    pipeline: Pipeline,
    theme: ColorfulTheme,
}

impl Menu {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            theme: ColorfulTheme::default(),
        }
    }

    pub async fn run(&self) -> AppResult<()> {
        loop {
            println!("\n{}", "=".repeat(50));
            println!("{}", " AI-Powered Cloud Cost Optimizer ".blue().bold());
            println!("{}", "=".repeat(50));

            let selection = Select::with_theme(&self.theme)
                .with_prompt("Select an action")
                .items(&OPTIONS[..])
                .default(0)
                .interact()?;

            match selection {
                0 => self.enter_description()?,
                1 => self.run_pipeline().await,
                2 => self.view_report(),
                _ => {
                    println!("{}", "Exiting...".green());
                    return Ok(());
                }
            }
        }
    }

    fn enter_description(&self) -> AppResult<()> {
        let text: String = Input::with_theme(&self.theme)
            .with_prompt("Enter project description (Enter for default)")
            .allow_empty(true)
            .interact_text()?;

        match self.pipeline.save_description(&text) {
            Ok(path) => println!("{}", format!("Saved to {}", path.display()).green()),
            Err(err) => println!("{}", failure_message(&err).red()),
        }
        Ok(())
    }

    async fn run_pipeline(&self) {
        println!("\nReading project description...");
        match self.pipeline.run().await {
            Ok(outcome) => {
                if let Some(budget) = &outcome.budget {
                    let line = render_budget(budget);
                    if budget.over_budget {
                        println!("{}", line.yellow());
                    } else {
                        println!("{line}");
                    }
                }
                println!("{}", "\nPipeline Completed Successfully!".green().bold());
            }
            Err(err) => println!("{}", failure_message(&err).red()),
        }
    }

    fn view_report(&self) {
        match self.pipeline.load_report() {
            Ok(report) => println!("\n{}", render_report(&report, TOP_RECOMMENDATIONS)),
            Err(err) => println!("{}", failure_message(&err).yellow()),
        }
    }
}
