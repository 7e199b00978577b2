use ratatui::layout::Rect;

/// Splits the screen into page body and footer.
pub fn shell_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = area.height.min(3);
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    (body, footer)
}

/// Splits the chrome layout body into header, page content and history list.
///
/// The history list takes the lower half of what is left under the header,
/// but never less than 3 rows when the area allows it.
pub fn chrome_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let rest = area.height.saturating_sub(header_height);
    let history_height = (rest / 2).max(rest.min(3));
    let content_height = rest.saturating_sub(history_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let content = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: content_height,
    };
    let history = Rect {
        x: area.x,
        y: area.y + header_height + content_height,
        width: area.width,
        height: history_height,
    };
    (header, content, history)
}

/// Rect of the given size centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn shell_regions_stack_without_overlap() {
        let (body, footer) = shell_regions(area(80, 24));
        assert_eq!(body.height, 21);
        assert_eq!(footer.y, 21);
        assert_eq!(footer.height, 3);
    }

    #[test]
    fn chrome_regions_cover_area() {
        let (header, content, history) = chrome_regions(area(80, 21));
        assert_eq!(header.height, 3);
        assert_eq!(header.height + content.height + history.height, 21);
        assert_eq!(history.y + history.height, 21);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let (header, content, history) = chrome_regions(area(10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(content.height + history.height, 0);
        let (body, footer) = shell_regions(area(10, 1));
        assert_eq!(body.height + footer.height, 1);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let rect = centered_rect_by_size(area(20, 10), 40, 4);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 3);
    }
}
