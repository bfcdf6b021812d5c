use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::Category;

use super::{App, ui_helpers};

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.in_compose() {
            self.handle_compose_key(key);
            false
        } else {
            self.handle_normal_key(key)
        }
    }

    fn handle_compose_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_compose(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
                self.render_needed = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.render_needed = true;
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char(' ') | KeyCode::Enter => self.refresh_mood(),
            KeyCode::Left => self.set_category(self.picker.current_category.prev()),
            KeyCode::Right => self.set_category(self.picker.current_category.next()),
            KeyCode::Char(c @ '1'..='4') => {
                let position = c as usize - '1' as usize;
                if let Some(category) = Category::by_position(position) {
                    self.set_category(category);
                }
            }
            KeyCode::Char('a') | KeyCode::Char('i') => self.start_compose(),
            KeyCode::Up => {
                let len = self.custom_len();
                if len > 0 {
                    self.selected_custom = ui_helpers::wrap_prev_index(self.selected_custom, len);
                    self.render_needed = true;
                }
            }
            KeyCode::Down => {
                let len = self.custom_len();
                if len > 0 {
                    self.selected_custom = ui_helpers::wrap_next_index(self.selected_custom, len);
                    self.render_needed = true;
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => self.delete_selected_custom(),
            KeyCode::Char('c') => self.copy_current_mood(),
            _ => {}
        }
        false
    }
}
