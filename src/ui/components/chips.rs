// SPDX-License-Identifier: MPL-2.0
//! Technology and tool chips.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Row, Text};
use iced::Element;

/// Renders `labels` as pills that wrap onto new lines.
pub fn view<'a, Message: 'a>(labels: &'a [String]) -> Element<'a, Message> {
    let row = labels.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, label| {
            row.push(
                Container::new(Text::new(label.as_str()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::chip),
            )
        },
    );

    row.wrap().vertical_spacing(spacing::XS).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_render_for_empty_and_filled_lists() {
        let labels = vec!["Nuke".to_string(), "Houdini".to_string()];
        let _filled: Element<'_, ()> = view(&labels);
        let _empty: Element<'_, ()> = view(&[]);
    }
}
