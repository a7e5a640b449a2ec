use anyhow::Result;
use clap::{Parser, Subcommand};
use geometry::cfg::RIGHT_ANGLE_TOL;
use geometry::{calculate_area, Circle, Triangle};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "geometry-cli")]
#[command(about = "Areas of circles and triangles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area of a circle
    Circle {
        #[arg(long, allow_negative_numbers = true)]
        radius: f64,
    },
    /// Area and right-angle check of a triangle given by its sides (any order)
    Triangle {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
        /// Absolute tolerance on |a² + b² − c²|
        #[arg(long, default_value_t = RIGHT_ANGLE_TOL)]
        tolerance: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Circle { radius } => circle(radius),
        Action::Triangle { a, b, c, tolerance } => triangle(a, b, c, tolerance),
        Action::Report => report(),
    }
}

fn circle(radius: f64) -> Result<()> {
    tracing::info!(radius, "circle");
    let shape = Circle::new(radius)?;
    let obj = json!({
        "kind": "circle",
        "radius": shape.radius(),
        "area": calculate_area(&shape),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn triangle(a: f64, b: f64, c: f64, tolerance: f64) -> Result<()> {
    tracing::info!(a, b, c, tolerance, "triangle");
    let shape = Triangle::new(a, b, c)?;
    let obj = json!({
        "kind": "triangle",
        "sides": shape.sides(),
        "area": calculate_area(&shape),
        "is_right": shape.is_right_with(tolerance),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block(json!({}));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_negative_sides() {
        let cmd = Cmd::try_parse_from(["geometry-cli", "triangle", "1", "2", "-3"]).unwrap();
        match cmd.action {
            Action::Triangle { c, tolerance, .. } => {
                assert_eq!(c, -3.0);
                assert_eq!(tolerance, RIGHT_ANGLE_TOL);
            }
            _ => panic!("expected triangle"),
        }
        assert!(triangle(1.0, 2.0, -3.0, RIGHT_ANGLE_TOL).is_err());
    }

    #[test]
    fn circle_command_validates() {
        let cmd = Cmd::try_parse_from(["geometry-cli", "circle", "--radius", "-1"]).unwrap();
        assert!(matches!(cmd.action, Action::Circle { radius } if radius == -1.0));
        assert!(circle(-1.0).is_err());
        assert!(circle(5.0).is_ok());
    }

    #[test]
    fn report_prints_without_arguments() {
        let cmd = Cmd::try_parse_from(["geometry-cli", "report"]).unwrap();
        assert!(matches!(cmd.action, Action::Report));
        assert!(report().is_ok());
    }
}
