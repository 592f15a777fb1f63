//! Command-line entry point for stagehand hand-pose utilities.

use std::path::Path;

use stagehand::pose::{
    apply_to_hands, mirror, pose_from_json, pose_to_json, HandSelection,
    JointPose,
};
use stagehand::StagehandError;

const USAGE: &str = "Usage: stagehand mirror <in.json> <out.json> \
                     [left|right|both]";

fn parse_target(arg: &str) -> Option<HandSelection> {
    match arg.to_ascii_lowercase().as_str() {
        "left" => Some(HandSelection::LeftHand),
        "right" => Some(HandSelection::RightHand),
        "both" => Some(HandSelection::BothHands),
        _ => None,
    }
}

/// Read a pose, apply it to `target` (or mirror it when `None`), and write
/// the result.
fn run_mirror(
    input: &Path,
    output: &Path,
    target: Option<HandSelection>,
) -> Result<usize, StagehandError> {
    let pose = pose_from_json(&std::fs::read_to_string(input)?)?;
    let result: JointPose = match target {
        Some(target) => apply_to_hands(&pose, None, target)?,
        None => mirror(&pose, None)?,
    };
    std::fs::write(output, pose_to_json(&result)?)?;
    Ok(result.len())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, output, target) = match args.as_slice() {
        [cmd, input, output] if cmd == "mirror" => (input, output, None),
        [cmd, input, output, hand] if cmd == "mirror" => {
            let Some(target) = parse_target(hand) else {
                log::error!("unknown hand '{hand}'. {USAGE}");
                std::process::exit(1);
            };
            (input, output, Some(target))
        }
        _ => {
            log::error!("{USAGE}");
            std::process::exit(1);
        }
    };

    match run_mirror(Path::new(input), Path::new(output), target) {
        Ok(joints) => log::info!("wrote {joints} joints to {output}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
