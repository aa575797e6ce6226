//! Demo page layout and rendering.
//!
//! Draws the fixture page the behaviors are attached to: a navbar with a
//! hamburger button, the dropdown menu overlay, a login panel with a FAQ
//! link, the two disclosure panels, and a status bar. Layout is recomputed
//! from the terminal area every frame; the same rects are what the page's
//! elements get placed at, so what you click is exactly what you see.

use crate::config::{Config, DisclosureConfig, DropdownConfig};
use crate::core::Page;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Where every page region lands for a given terminal area.
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub navbar: Rect,
    pub hamburger: Rect,
    pub dropdown_menu: Rect,
    pub login_panel: Rect,
    pub faq_link: Rect,
    pub faq_text: Rect,
    pub command: Rect,
    pub status_bar: Rect,
}

/// Renders the demo page and keeps its layout in sync with the element
/// store. Element ids and marker names come from config so the view and the
/// behaviors always agree on the markup contract.
pub struct PageView {
    dropdown: DropdownConfig,
    disclosure: DisclosureConfig,
    menu_items: Vec<String>,
    show_timestamps: bool,
    status: String,
}

impl PageView {
    pub fn new(config: &Config) -> Self {
        Self {
            dropdown: config.dropdown.clone(),
            disclosure: config.disclosure.clone(),
            menu_items: config.menu.items.clone(),
            show_timestamps: config.ui.show_timestamps,
            status: String::from("Click the menu button or the FAQ link. Press q to quit."),
        }
    }

    /// Compute the page layout for a terminal area. Every rect is clamped
    /// into the area, so undersized terminals degrade to empty regions that
    /// neither render nor accept clicks.
    pub fn layout(&self, area: Rect) -> PageLayout {
        let navbar = Rect::new(0, 0, area.width, 3).intersection(area);
        let hamburger = Rect::new(area.width.saturating_sub(6), 0, 5, 3).intersection(area);

        let menu_width = self
            .menu_items
            .iter()
            .map(|item| item.len())
            .max()
            .unwrap_or(12)
            .min(20) as u16
            + 4;
        let menu_height = self.menu_items.len() as u16 + 2;
        let dropdown_menu = Rect::new(
            area.width.saturating_sub(menu_width + 1),
            3,
            menu_width,
            menu_height,
        )
        .intersection(area);

        let login_panel =
            Rect::new(2, 4, 40.min(area.width.saturating_sub(4)), 7).intersection(area);
        // The link is the last content line of the login panel
        let faq_link =
            Rect::new(login_panel.x + 1, login_panel.y + 5, 10, 1).intersection(login_panel);

        let panel_width = 44.min(area.width.saturating_sub(4));
        let faq_text = Rect::new(2, 12, panel_width, 6).intersection(area);
        let command = Rect::new(2, 18, panel_width, 6).intersection(area);

        let status_bar =
            Rect::new(0, area.height.saturating_sub(1), area.width, 1).intersection(area);

        PageLayout {
            navbar,
            hamburger,
            dropdown_menu,
            login_panel,
            faq_link,
            faq_text,
            command,
            status_bar,
        }
    }

    fn element_bounds(&self, area: Rect) -> [(&str, Rect); 5] {
        let layout = self.layout(area);
        [
            (self.dropdown.trigger.as_str(), layout.hamburger),
            (self.dropdown.menu.as_str(), layout.dropdown_menu),
            (self.disclosure.trigger.as_str(), layout.faq_link),
            (self.disclosure.primary.as_str(), layout.faq_text),
            (self.disclosure.secondary.as_str(), layout.command),
        ]
    }

    /// Register every behavior element at its current bounds. Called once
    /// at page assembly, before the behaviors attach.
    pub fn register_elements(&self, page: &mut Page, area: Rect) {
        for (id, bounds) in self.element_bounds(area) {
            page.register(id, bounds);
        }
    }

    /// Re-place every behavior element after the terminal area changed.
    /// Markers survive; only bounds move.
    pub fn place_elements(&self, page: &mut Page, area: Rect) {
        for (id, bounds) in self.element_bounds(area) {
            page.place(id, bounds);
        }
    }

    /// Map a click inside the open menu to the item on that row, honoring
    /// the one-cell border. Callers check that the menu is actually open;
    /// this is pure row math.
    pub fn menu_item_at(&self, x: u16, y: u16, area: Rect) -> Option<&str> {
        let menu = self.layout(area).dropdown_menu;
        if x < menu.x || x >= menu.x + menu.width || y < menu.y || y >= menu.y + menu.height {
            return None;
        }

        let relative_y = (y - menu.y) as usize;
        if relative_y == 0 || relative_y >= menu.height as usize - 1 {
            return None; // border rows
        }

        self.menu_items.get(relative_y - 1).map(|item| item.as_str())
    }

    /// Replace the status line, timestamping it when configured.
    pub fn set_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.status = if self.show_timestamps {
            format!("[{}] {}", Local::now().format("%H:%M:%S"), text)
        } else {
            text
        };
    }

    /// Render the whole page. Panel visibility follows the page's markers;
    /// the menu overlay is drawn last so it sits on top of the body.
    pub fn render(&self, page: &Page, frame: &mut Frame) {
        let area = frame.area();
        let layout = self.layout(area);
        let menu_open = page.is_marked(&self.dropdown.menu, &self.dropdown.marker);

        let navbar = Block::default()
            .title(" panel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(navbar, layout.navbar);

        let burger_style = if menu_open {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(255, 215, 0))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let burger = Paragraph::new("≡")
            .alignment(Alignment::Center)
            .style(burger_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(burger, layout.hamburger);

        let link_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);
        let login_lines = vec![
            Line::from("Username: admin"),
            Line::from("Password: ********"),
            Line::from(Span::styled("[ Log in ]", Style::default().fg(Color::Green))),
            Line::from(""),
            Line::from(Span::styled("Need help?", link_style)),
        ];
        let login = Paragraph::new(login_lines).block(
            Block::default()
                .title("Login")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(login, layout.login_panel);

        if page.is_marked(&self.disclosure.primary, &self.disclosure.primary_marker) {
            let faq_lines = vec![
                Line::from("Q: I forgot my password."),
                Line::from("A: Run the reset command below."),
                Line::from("Q: My account is locked."),
                Line::from("A: Wait ten minutes and retry."),
            ];
            let faq = Paragraph::new(faq_lines).block(
                Block::default()
                    .title("FAQ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
            frame.render_widget(faq, layout.faq_text);
        }

        if page.is_marked(&self.disclosure.secondary, &self.disclosure.secondary_marker) {
            let command_lines = vec![
                Line::from("reset-password <user>"),
                Line::from("unlock <user>"),
                Line::from("sessions --active"),
                Line::from("whoami"),
            ];
            let commands = Paragraph::new(command_lines).block(
                Block::default()
                    .title("Commands")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
            frame.render_widget(commands, layout.command);
        }

        let status =
            Paragraph::new(self.status.as_str()).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status, layout.status_bar);

        if menu_open {
            self.render_menu(layout.dropdown_menu, frame);
        }
    }

    fn render_menu(&self, menu: Rect, frame: &mut Frame) {
        let inner_width = menu.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .menu_items
            .iter()
            .map(|item| {
                let text = format!(" {:<width$}", item, width = inner_width.saturating_sub(1));
                Line::from(Span::styled(
                    text,
                    Style::default().fg(Color::Cyan).bg(Color::Black),
                ))
            })
            .collect();

        let widget = Paragraph::new(lines).block(
            Block::default()
                .title("Menu")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        // Clear the overlay area to prevent bleed-through
        frame.render_widget(Clear, menu);
        frame.render_widget(widget, menu);
    }
}
