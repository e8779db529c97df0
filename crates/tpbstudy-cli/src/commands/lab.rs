use clap::Subcommand;
use serde_json::json;
use tpbstudy_core::lab::{self, periodic, LinearFunction, ProjectileLaunch, SolutionKind};
use tpbstudy_core::{Config, PowerTerm};

#[derive(Subcommand)]
pub enum LabAction {
    /// Projectile motion: flight time, range and apex height
    Projectile {
        /// Launch speed in m/s
        #[arg(long)]
        velocity: f64,
        /// Launch angle in degrees (0-90, exclusive)
        #[arg(long)]
        angle: f64,
        /// Also print sampled positions along the path
        #[arg(long)]
        trajectory: bool,
    },
    /// pH of a strong acid or base
    Ph {
        /// Molar concentration (mol/L)
        #[arg(long)]
        concentration: f64,
        /// Treat the concentration as [OH-] instead of [H+]
        #[arg(long)]
        base: bool,
    },
    /// Sample y = mx + c over [-10, 10]
    Linear {
        #[arg(long, allow_negative_numbers = true)]
        gradient: f64,
        #[arg(long, allow_negative_numbers = true)]
        intercept: f64,
        /// Distance between sampled x values (defaults to lab.plot_step)
        #[arg(long)]
        step: Option<f64>,
    },
    /// Derivative of a*x^n by the power rule
    Derivative {
        #[arg(long, allow_negative_numbers = true)]
        coefficient: f64,
        #[arg(long, allow_negative_numbers = true)]
        power: f64,
    },
    /// Look up an element by symbol or atomic number
    Element {
        /// Symbol (e.g. "Fe") or atomic number (e.g. "26")
        query: String,
    },
    /// List the periodic table
    Elements,
}

pub fn run(action: LabAction) -> Result<(), Box<dyn std::error::Error>> {
    let out = match action {
        LabAction::Projectile {
            velocity,
            angle,
            trajectory,
        } => {
            let launch = ProjectileLaunch::new(velocity, angle)?;
            let mut out = json!({
                "initial_velocity": launch.initial_velocity(),
                "angle_degrees": launch.angle_degrees(),
                "summary": launch.summary(),
            });
            if trajectory {
                let step = Config::load_or_default().lab.trajectory_step_secs;
                let points: Vec<_> = launch.trajectory(step)?.collect();
                out["trajectory"] = serde_json::to_value(points)?;
            }
            out
        }
        LabAction::Ph {
            concentration,
            base,
        } => {
            let kind = SolutionKind::from_is_acid(!base);
            let reading = lab::reading(concentration, kind)?;
            json!({
                "concentration": concentration,
                "kind": kind,
                "ph": reading.ph,
                "poh": reading.poh,
                "classification": reading.classification,
                "label": reading.classification.label(),
            })
        }
        LabAction::Linear {
            gradient,
            intercept,
            step,
        } => {
            let function = LinearFunction::new(gradient, intercept)?;
            let step = step.unwrap_or_else(|| Config::load_or_default().lab.plot_step);
            let points: Vec<_> = function.samples_with_step(step)?.collect();
            json!({
                "function": function.to_string(),
                "points": points,
            })
        }
        LabAction::Derivative { coefficient, power } => {
            let term = PowerTerm::new(coefficient, power)?;
            let derivative = term.derivative();
            json!({
                "input": term,
                "derivative": derivative,
                "display": format!("f'(x) = {derivative}"),
            })
        }
        LabAction::Element { query } => {
            let element =
                periodic::lookup(&query).ok_or_else(|| format!("unknown element: {query}"))?;
            serde_json::to_value(element)?
        }
        LabAction::Elements => serde_json::to_value(periodic::elements())?,
    };

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
