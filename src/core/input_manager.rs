use crate::core::parse::{
    parse_command_sequence, parse_rover_pose, parse_surface_size, strip_line_ending, Rejection,
};
use crate::domain::model::{CommandSequence, MissionPlan, RoverPlan, RoverPose, SurfaceSize};
use crate::domain::ports::{DirectionResolver, MessageProvider};
use crate::utils::error::{InputError, Result};
use std::io::{BufRead, Write};

/// Interactive readers for surface size, rover pose and command sequence.
///
/// Each reader consumes one line per attempt and keeps asking until a line
/// validates. A rejected line is answered with the incorrect-input message
/// and leaves nothing behind for the next attempt. The only ways out are an
/// accepted line or a closed/failed input stream.
pub struct InputManager<R, W, D, M> {
    input: R,
    output: W,
    directions: D,
    messages: M,
}

impl<R, W, D, M> InputManager<R, W, D, M>
where
    R: BufRead,
    W: Write,
    D: DirectionResolver,
    M: MessageProvider,
{
    pub fn new(input: R, output: W, directions: D, messages: M) -> Self {
        Self {
            input,
            output,
            directions,
            messages,
        }
    }

    pub fn read_surface_size(&mut self) -> Result<SurfaceSize> {
        let surface = read_until_valid(
            &mut self.input,
            &mut self.output,
            self.messages.incorrect_input(),
            "surface size",
            parse_surface_size,
        )?;
        tracing::debug!("✅ Surface size accepted: {}", surface);
        Ok(surface)
    }

    pub fn read_rover_pose(&mut self) -> Result<RoverPose> {
        say(&mut self.output, self.messages.rover_position_prompt())?;

        let directions = &self.directions;
        let pose = read_until_valid(
            &mut self.input,
            &mut self.output,
            self.messages.incorrect_input(),
            "rover pose",
            |line| parse_rover_pose(line, directions),
        )?;
        tracing::debug!("✅ Rover pose accepted: {}", pose);
        Ok(pose)
    }

    pub fn read_command_sequence(&mut self) -> Result<CommandSequence> {
        say(&mut self.output, self.messages.movement_commands_prompt())?;

        let commands = read_until_valid(
            &mut self.input,
            &mut self.output,
            self.messages.incorrect_input(),
            "command sequence",
            parse_command_sequence,
        )?;
        tracing::debug!("✅ {} commands accepted: {}", commands.len(), commands);
        Ok(commands)
    }

    /// Pose, then commands, for one rover.
    pub fn read_rover_plan(&mut self) -> Result<RoverPlan> {
        let pose = self.read_rover_pose()?;
        let commands = self.read_command_sequence()?;
        Ok(RoverPlan { pose, commands })
    }

    /// Surface (after its prompt), then `rover_count` rover plans in order.
    pub fn read_mission(&mut self, rover_count: usize) -> Result<MissionPlan> {
        say(&mut self.output, self.messages.surface_size_prompt())?;
        let surface = self.read_surface_size()?;

        let mut rovers = Vec::with_capacity(rover_count);
        for n in 1..=rover_count {
            tracing::debug!("Reading rover {}/{}", n, rover_count);
            rovers.push(self.read_rover_plan()?);
        }

        tracing::info!(
            "📋 Mission collected: surface {}, {} rover(s)",
            surface,
            rovers.len()
        );
        Ok(MissionPlan { surface, rovers })
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn say<W: Write>(output: &mut W, message: &str) -> Result<()> {
    writeln!(output, "{}", message)?;
    output.flush()?;
    Ok(())
}

enum Attempt<T> {
    AwaitingLine,
    Validating(String),
    Accepted(T),
}

fn read_until_valid<T, R, W, F>(
    input: &mut R,
    output: &mut W,
    incorrect_input: &str,
    expecting: &'static str,
    mut validate: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> std::result::Result<T, Rejection>,
{
    let mut state = Attempt::AwaitingLine;
    let mut attempts = 0usize;

    loop {
        state = match state {
            Attempt::AwaitingLine => {
                let mut buf = Vec::new();
                if input.read_until(b'\n', &mut buf)? == 0 {
                    tracing::warn!(
                        "Input closed after {} rejected attempt(s) while waiting for {}",
                        attempts,
                        expecting
                    );
                    return Err(InputError::InputClosed { expecting });
                }
                // Undecodable bytes become U+FFFD and fail validation like any other typo.
                Attempt::Validating(String::from_utf8_lossy(&buf).into_owned())
            }
            Attempt::Validating(line) => match validate(strip_line_ending(&line)) {
                Ok(value) => Attempt::Accepted(value),
                Err(rejection) => {
                    attempts += 1;
                    tracing::debug!(
                        "❌ Rejected {} input {:?}: {}",
                        expecting,
                        strip_line_ending(&line),
                        rejection
                    );
                    say(output, incorrect_input)?;
                    Attempt::AwaitingLine
                }
            },
            Attempt::Accepted(value) => return Ok(value),
        };
    }
}
