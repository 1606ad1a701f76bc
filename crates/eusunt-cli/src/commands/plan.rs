use clap::Subcommand;
use eusunt_core::{plan_by_id, plans};

#[derive(Subcommand)]
pub enum PlanAction {
    /// List the available plans
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one plan in full
    Show { id: u32 },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::List { json } => {
            let all = plans();
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                for plan in &all {
                    let connectors = if plan.has_connectors() {
                        format!("  [{}]", plan.connectors.join(", "))
                    } else {
                        String::new()
                    };
                    println!(
                        "{}  {}{}  -- insignă: {}",
                        plan.id, plan.title, connectors, plan.badge
                    );
                }
            }
        }
        PlanAction::Show { id } => {
            let plan = plan_by_id(id).ok_or_else(|| format!("unknown plan id: {id}"))?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }
    Ok(())
}
