//! Drawing symbol table

/// What a pattern symbol asks the turtle to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `F`: move forward and draw
    Draw,
    /// `f`: move forward without drawing
    Move,
    /// `-`: heading += angle step
    TurnLeft,
    /// `+`: heading -= angle step
    TurnRight,
    /// `|`: heading += 180°
    TurnAround,
    /// `[`: save the cursor
    Push,
    /// `]`: restore the last saved cursor
    Pop,
}

impl Command {
    /// Look up a symbol; anything not in the table is ignored by the turtle
    pub fn from_symbol(symbol: char) -> Option<Command> {
        match symbol {
            'F' => Some(Command::Draw),
            'f' => Some(Command::Move),
            '-' => Some(Command::TurnLeft),
            '+' => Some(Command::TurnRight),
            '|' => Some(Command::TurnAround),
            '[' => Some(Command::Push),
            ']' => Some(Command::Pop),
            _ => None,
        }
    }
}
