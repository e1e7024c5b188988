//! Keyboard input dispatch — global keys, then focused-field editing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Field};

/// Handle a key event, mutating app state and recomputing as needed.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.commit_account_size();
            app.running = false;
        }
        KeyCode::Down | KeyCode::Tab => move_focus(app, true),
        KeyCode::Up | KeyCode::BackTab => move_focus(app, false),
        KeyCode::Enter => {
            if app.focus.is_toggle() {
                toggle_field(app);
            } else {
                move_focus(app, true);
            }
        }
        KeyCode::Char(' ') if app.focus.is_toggle() => toggle_field(app),
        KeyCode::Char('l') | KeyCode::Char('h') | KeyCode::Left | KeyCode::Right
            if app.focus.is_toggle() =>
        {
            toggle_field(app)
        }
        KeyCode::Backspace => {
            if let Some(buffer) = app.form.buffer_mut(app.focus) {
                buffer.pop();
                app.recompute();
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
            if let Some(buffer) = app.form.buffer_mut(app.focus) {
                buffer.push(c);
                app.recompute();
            }
        }
        _ => {}
    }
}

/// Move focus, persisting the account preference when leaving that field.
fn move_focus(app: &mut AppState, forward: bool) {
    if app.focus == Field::AccountSize {
        app.commit_account_size();
    }
    app.focus = if forward {
        app.focus.next()
    } else {
        app.focus.prev()
    };
}

fn toggle_field(app: &mut AppState) {
    match app.focus {
        Field::Direction => {
            app.form.direction = app.form.direction.opposite();
        }
        Field::RiskBasis => {
            app.form.basis = app.form.basis.toggle();
        }
        _ => return,
    }
    app.recompute();
}
