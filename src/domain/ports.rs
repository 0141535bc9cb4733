/// Maps a facing character to a direction-state index.
///
/// Returning `None` means the character is not a known direction; the pose
/// reader treats that as a rejected attempt.
pub trait DirectionResolver {
    fn resolve_direction(&self, direction: char) -> Option<usize>;
}

impl<D: DirectionResolver + ?Sized> DirectionResolver for &D {
    fn resolve_direction(&self, direction: char) -> Option<usize> {
        (**self).resolve_direction(direction)
    }
}

/// Where the prompt and error strings come from.
pub trait MessageProvider {
    fn incorrect_input(&self) -> &str;
    fn surface_size_prompt(&self) -> &str;
    fn rover_position_prompt(&self) -> &str;
    fn movement_commands_prompt(&self) -> &str;
}

impl<M: MessageProvider + ?Sized> MessageProvider for &M {
    fn incorrect_input(&self) -> &str {
        (**self).incorrect_input()
    }

    fn surface_size_prompt(&self) -> &str {
        (**self).surface_size_prompt()
    }

    fn rover_position_prompt(&self) -> &str {
        (**self).rover_position_prompt()
    }

    fn movement_commands_prompt(&self) -> &str {
        (**self).movement_commands_prompt()
    }
}
