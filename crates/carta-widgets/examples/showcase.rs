//! Component gallery on the desktop simulator.
//!
//! Run with:
//!
//! ```text
//! cargo run --package carta-widgets --example showcase --features simulator
//! ```
//!
//! Left/Right arrows turn list pages, `i` toggles the indicator style,
//! `d` toggles dark mode.

// Desktop demo binary: positions are hand-placed pixel values.
#![allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]

use carta_paging::{PageCursor, Paginator};
use carta_theme::{metrics, Mode, Palette, TextRole, Variant};
use carta_widgets::prelude::*;
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_graphics_simulator::{
    sdl2::Keycode, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};

const SCREEN: Size = Size::new(480, 800);

const CHAPTERS: [&str; 12] = [
    "Down the Rabbit-Hole",
    "The Pool of Tears",
    "A Caucus-Race",
    "The Rabbit Sends in a Little Bill",
    "Advice from a Caterpillar",
    "Pig and Pepper",
    "A Mad Tea-Party",
    "The Queen's Croquet-Ground",
    "The Mock Turtle's Story",
    "The Lobster Quadrille",
    "Who Stole the Tarts?",
    "Alice's Evidence",
];

struct Showcase {
    mode: Mode,
    indicator: IndicatorStyle,
    cursor: PageCursor,
}

impl Showcase {
    fn palette(&self) -> Palette {
        Palette::select(Variant::Grayscale, self.mode)
    }

    fn draw(&self, display: &mut SimulatorDisplay<Gray4>) -> Result<(), core::convert::Infallible> {
        let palette = self.palette();

        Rectangle::new(Point::zero(), SCREEN)
            .into_styled(PrimitiveStyle::with_fill(palette.background))
            .draw(display)?;

        Text::new("Component Gallery")
            .role(TextRole::Headline)
            .palette(palette)
            .color(palette.on_background)
            .render(display, Point::new(16, 16))?;

        // Buttons in all three kinds plus a disabled one.
        let buttons = [
            Button::new("Read").palette(palette),
            Button::new("Browse").kind(ButtonKind::Outlined).palette(palette),
            Button::new("More").kind(ButtonKind::Text).palette(palette),
            Button::new("Sync").palette(palette).enabled(false),
        ];
        let mut x = 16;
        for button in &buttons {
            button.render(display, Point::new(x, 56))?;
            x += button.size().width as i32 + metrics::spacing::SMALL as i32;
        }

        // Text fields: resting, focused, error.
        TextField::new("", 214)
            .label("Search")
            .placeholder("Title or author")
            .palette(palette)
            .render(display, Point::new(16, 124))?;
        TextField::new("carroll", 214)
            .label("Author")
            .focused(true)
            .palette(palette)
            .render(display, Point::new(250, 124))?;
        TextField::new("18S7", 214)
            .label("Year")
            .supporting("Digits only")
            .error(true)
            .palette(palette)
            .render(display, Point::new(16, 214))?;

        // An elevated card with themed text inside.
        let card = Card::new().kind(CardKind::Elevated).palette(palette);
        let card_bounds = Rectangle::new(Point::new(250, 214), Size::new(214, 104));
        let content = card.render(display, card_bounds)?;
        Text::new("Now Reading")
            .role(TextRole::Title)
            .palette(palette)
            .color(palette.on_primary_container)
            .render(display, content.top_left)?;
        Text::new("Chapter 7 of 12")
            .role(TextRole::Caption)
            .palette(palette)
            .color(palette.on_primary_container)
            .render(
                display,
                Point::new(content.top_left.x, content.top_left.y + 28),
            )?;

        // The paginated chapter list drives the whole lower half.
        let list_bounds = Rectangle::new(Point::new(0, 340), Size::new(480, 460));
        let list = PaginatedList::new(&CHAPTERS)
            .palette(palette)
            .indicator(self.indicator);
        list.render(display, list_bounds, &self.cursor, |d, item, index, cell| {
            let row = Card::new().palette(palette).content_padding(
                carta_layout::Edges::horizontal_vertical(
                    metrics::spacing::MEDIUM,
                    metrics::spacing::SMALL,
                ),
            );
            let inner = row.render(d, cell)?;
            let mut number = heapless::String::<8>::new();
            use core::fmt::Write;
            write!(number, "{:>2}.", index + 1).ok();
            Text::new(number.as_str())
                .role(TextRole::Label)
                .palette(palette)
                .render(d, inner.top_left)?;
            Text::new(item)
                .role(TextRole::Body)
                .palette(palette)
                .render(d, Point::new(inner.top_left.x + 40, inner.top_left.y))
        })?;

        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut display = SimulatorDisplay::<Gray4>::new(SCREEN);
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("carta showcase", &output_settings);

    let paginator = Paginator::new(4)?;
    let mut state = Showcase {
        mode: Mode::Light,
        indicator: IndicatorStyle::Numbers,
        cursor: PageCursor::new(paginator),
    };

    println!("carta component gallery");
    println!("  Left/Right  turn list pages");
    println!("  i           toggle indicator style");
    println!("  d           toggle dark mode");

    state.draw(&mut display)?;

    'running: loop {
        window.update(&display);
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    match keycode {
                        Keycode::Right => state.cursor.next(CHAPTERS.len()),
                        Keycode::Left => state.cursor.prev(),
                        Keycode::I => {
                            state.indicator = match state.indicator {
                                IndicatorStyle::Numbers => IndicatorStyle::Dots,
                                IndicatorStyle::Dots => IndicatorStyle::Numbers,
                            };
                        }
                        Keycode::D => {
                            state.mode = match state.mode {
                                Mode::Light => Mode::Dark,
                                Mode::Dark => Mode::Light,
                            };
                        }
                        _ => continue,
                    }
                    state.draw(&mut display)?;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
