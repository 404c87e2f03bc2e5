pub mod debounce;
pub mod edge_pads;
pub mod rotary;

use storybook_core::input::{InputEvent, InputProvider};

#[derive(Debug)]
pub enum ChainError<A, B> {
    First(A),
    Second(B),
}

/// Polls `first`, then `second` when `first` had nothing.
///
/// An error from either side is returned as is; the other provider is not
/// polled on that call.
#[derive(Debug)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> InputProvider for Chain<A, B>
where
    A: InputProvider,
    B: InputProvider,
{
    type Error = ChainError<A::Error, B::Error>;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if let Some(event) = self.first.poll_event().map_err(ChainError::First)? {
            return Ok(Some(event));
        }

        self.second.poll_event().map_err(ChainError::Second)
    }
}

#[cfg(test)]
mod tests {
    use storybook_core::input::mock::{MockInput, ScriptedInput};

    use super::*;

    struct Broken;

    impl InputProvider for Broken {
        type Error = ();

        fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
            Err(())
        }
    }

    #[test]
    fn first_provider_wins_then_second_drains() {
        let mut chain = Chain::new(
            ScriptedInput::new(&[InputEvent::RotateCw]),
            ScriptedInput::new(&[InputEvent::TapLeft]),
        );

        assert_eq!(chain.poll_event().unwrap(), Some(InputEvent::RotateCw));
        assert_eq!(chain.poll_event().unwrap(), Some(InputEvent::TapLeft));
        assert_eq!(chain.poll_event().unwrap(), None);
    }

    #[test]
    fn errors_name_their_side() {
        let mut chain = Chain::new(MockInput, Broken);
        assert!(matches!(chain.poll_event(), Err(ChainError::Second(()))));

        let mut chain = Chain::new(Broken, MockInput);
        assert!(matches!(chain.poll_event(), Err(ChainError::First(()))));
    }
}
