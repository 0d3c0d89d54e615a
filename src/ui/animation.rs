//! Looping handwashing animation

/// Frames of the instructional animation, played in order and repeated
pub const FRAMES: &[&str] = &[
    concat!(
        "     _____      _____     \n",
        "    /     \\    /     \\    \n",
        "   | palms |--| palms |   \n",
        "    \\_____/    \\_____/    \n",
        "     rub palm to palm     ",
    ),
    concat!(
        "      _____  _____        \n",
        "     / ___ \\/ ___ \\       \n",
        "    | |   |  |   | |      \n",
        "     \\_____/\\_____/       \n",
        "   backs of both hands    ",
    ),
    concat!(
        "       __________         \n",
        "      /|||||||||\\         \n",
        "     |  fingers  |        \n",
        "      \\|||||||||/         \n",
        "  interlace the fingers   ",
    ),
    concat!(
        "         ____             \n",
        "        / () \\            \n",
        "       |  ()  |~~~        \n",
        "        \\____/            \n",
        "  thumbs and fingertips   ",
    ),
];

/// Cursor over [`FRAMES`] that wraps around forever
#[derive(Debug, Clone, Default)]
pub struct Animation {
    index: usize,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static str {
        FRAMES[self.index]
    }

    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % FRAMES.len();
        self.current()
    }
}
