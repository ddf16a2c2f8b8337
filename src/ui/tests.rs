//! UI module tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

use super::{
    app::App,
    handlers::{GameHandler, InputHandler, ProductsHandler, TodoHandler},
    types::{InputStatus, LogBuffer, Screen, TodoInputMode},
};
use crate::{
    board::Mark,
    config::Config,
    game::{GameStatus, SortOrder},
    products::builtin_catalog,
    todo::TaskId,
};

/// Helper function to create a test app with the default config.
fn create_test_app() -> App {
    let config = Config::default();
    let catalog = builtin_catalog().unwrap();
    App::new(&config, catalog, LogBuffer::new())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn press(app: &mut App, event: KeyEvent) -> bool {
    InputHandler::new(app).handle_key(event)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, key(KeyCode::Char(c)));
    }
}

fn render_buffer(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal.backend().buffer().clone()
}

fn render(app: &App) -> String {
    render_buffer(app)
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let app = create_test_app();

        assert_eq!(app.screen, Screen::Game);
        assert!(app.input.is_empty());
        assert_eq!(app.game.history().len(), 1);
        assert_eq!(app.sort_order, SortOrder::Ascending);
        assert_eq!(app.todos.tasks().len(), 3);
        assert_eq!(app.todo_mode, TodoInputMode::Adding);
    }

    #[test]
    fn test_log_buffer() {
        let logs = LogBuffer::new();

        logs.push("Test message 1".to_string());
        logs.push("Test message 2".to_string());

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" Test message 1"));
        assert!(lines[1].ends_with(" Test message 2"));
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        assert!(lines.last().unwrap().ends_with("Message 349"));
    }

    #[test]
    fn test_start_screen_from_config() {
        let mut config = Config::default();
        config.ui.start_screen = Screen::Products;
        let app = App::new(&config, Vec::new(), LogBuffer::new());

        assert_eq!(app.screen, Screen::Products);
    }
}

#[cfg(test)]
mod input_handler_tests {
    use super::*;

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = create_test_app();
        assert!(press(&mut app, ctrl('q')));
    }

    #[test]
    fn test_tab_cycles_screens() {
        let mut app = create_test_app();

        press(&mut app, key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Products);
        press(&mut app, key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Todos);
        press(&mut app, key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Game);
    }

    #[test]
    fn test_ctrl_shortcuts_switch_screens() {
        let mut app = create_test_app();

        press(&mut app, ctrl('t'));
        assert_eq!(app.screen, Screen::Todos);
        press(&mut app, ctrl('p'));
        assert_eq!(app.screen, Screen::Products);
        press(&mut app, ctrl('g'));
        assert_eq!(app.screen, Screen::Game);
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let mut app = create_test_app();

        press(&mut app, key(KeyCode::Char('1')));
        press(&mut app, key(KeyCode::Char('5')));

        let board = app.game.current_board();
        assert_eq!(board.get(0), Some(Mark::A));
        assert_eq!(board.get(4), Some(Mark::B));
    }

    #[test]
    fn test_digit_keys_do_not_play_on_other_screens() {
        let mut app = create_test_app();
        app.screen = Screen::Products;

        press(&mut app, key(KeyCode::Char('1')));

        assert_eq!(app.game.history().len(), 1);
        assert_eq!(app.filter.text, "1");
    }

    #[test]
    fn test_products_typing_and_stock_toggle() {
        let mut app = create_test_app();
        app.screen = Screen::Products;

        type_text(&mut app, "peas");
        press(&mut app, key(KeyCode::Backspace));
        press(&mut app, ctrl('s'));

        assert_eq!(app.filter.text, "pea");
        assert!(app.filter.in_stock_only);

        press(&mut app, key(KeyCode::Esc));
        assert!(app.filter.text.is_empty());
    }

    #[test]
    fn test_todos_add_via_keys() {
        let mut app = create_test_app();
        app.screen = Screen::Todos;

        type_text(&mut app, "Buy tickets");
        press(&mut app, key(KeyCode::Enter));

        assert_eq!(app.todos.tasks().len(), 4);
        assert_eq!(app.todos.tasks()[3].text, "Buy tickets");
        assert_eq!(app.selected_task, 3);
        assert!(app.input.is_empty());
    }
}

#[cfg(test)]
mod game_handler_tests {
    use super::*;

    #[test]
    fn test_win_scenario_logs_winner() {
        let mut app = create_test_app();

        for cell in [0, 4, 1, 8, 2] {
            GameHandler::new(&mut app).play_cell(cell);
        }

        assert!(matches!(
            app.game.status(),
            GameStatus::Won { mark: Mark::A, .. }
        ));
        assert!(app.logs.lines().iter().any(|l| l.ends_with("Winner: X")));

        GameHandler::new(&mut app).play_cell(5);
        assert_eq!(app.game.history().len(), 6);
    }

    #[test]
    fn test_selection_follows_latest_move() {
        let mut app = create_test_app();

        GameHandler::new(&mut app).play_cell(0);
        GameHandler::new(&mut app).play_cell(1);

        assert_eq!(app.selected_move, 2);
    }

    #[test]
    fn test_jump_selected_moves_cursor() {
        let mut app = create_test_app();
        for cell in [0, 4, 1] {
            GameHandler::new(&mut app).play_cell(cell);
        }

        press(&mut app, key(KeyCode::Up));
        press(&mut app, key(KeyCode::Up));
        press(&mut app, key(KeyCode::Enter));

        assert_eq!(app.game.history().cursor(), 1);
        assert!(!app.game.history().is_latest());
        assert_eq!(app.selected_move, 1);
    }

    #[test]
    fn test_play_after_jump_truncates_history() {
        let mut app = create_test_app();
        for cell in [0, 4, 1, 8] {
            GameHandler::new(&mut app).play_cell(cell);
        }

        GameHandler::new(&mut app).jump_to(1);
        GameHandler::new(&mut app).play_cell(2);

        assert_eq!(app.game.history().len(), 3);
        assert_eq!(app.game.history().cursor(), 2);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut app = create_test_app();
        GameHandler::new(&mut app).play_cell(0);

        GameHandler::new(&mut app).jump_to(7);

        assert_eq!(app.game.history().cursor(), 1);
    }

    #[test]
    fn test_toggle_order_keeps_selected_move() {
        let mut app = create_test_app();
        for cell in [0, 4, 1] {
            GameHandler::new(&mut app).play_cell(cell);
        }
        assert_eq!(app.selected_move, 3);

        GameHandler::new(&mut app).toggle_order();

        assert_eq!(app.sort_order, SortOrder::Descending);
        assert_eq!(app.selected_move, 0);
        let moves = app.game.moves(app.sort_order);
        assert_eq!(moves[app.selected_move].index, 3);
    }

    #[test]
    fn test_selection_clamped_to_moves() {
        let mut app = create_test_app();
        GameHandler::new(&mut app).play_cell(0);

        GameHandler::new(&mut app).select_next();
        GameHandler::new(&mut app).select_next();
        assert_eq!(app.selected_move, 1);

        for _ in 0..3 {
            GameHandler::new(&mut app).select_prev();
        }
        assert_eq!(app.selected_move, 0);
    }

    #[test]
    fn test_restart() {
        let mut app = create_test_app();
        GameHandler::new(&mut app).play_cell(0);

        press(&mut app, ctrl('n'));

        assert_eq!(app.game.history().len(), 1);
        assert_eq!(app.selected_move, 0);
    }
}

#[cfg(test)]
mod products_handler_tests {
    use super::*;

    #[test]
    fn test_toggle_in_stock_logs_count() {
        let mut app = create_test_app();

        ProductsHandler::new(&mut app).toggle_in_stock();

        assert!(app.filter.in_stock_only);
        assert!(
            app.logs
                .lines()
                .iter()
                .any(|l| l.ends_with("In-stock only on (4 products shown)"))
        );
    }
}

#[cfg(test)]
mod todo_handler_tests {
    use super::*;

    #[test]
    fn test_input_status() {
        let mut app = create_test_app();
        assert!(matches!(
            TodoHandler::new(&mut app).input_status(),
            InputStatus::Incomplete
        ));

        app.input = "   ".to_string();
        assert!(matches!(
            TodoHandler::new(&mut app).input_status(),
            InputStatus::Invalid(_)
        ));

        app.input = "Pack".to_string();
        assert!(matches!(
            TodoHandler::new(&mut app).input_status(),
            InputStatus::Valid
        ));
    }

    #[test]
    fn test_blank_input_is_not_added() {
        let mut app = create_test_app();
        app.input = "   ".to_string();

        TodoHandler::new(&mut app).submit_input();

        assert_eq!(app.todos.tasks().len(), 3);
        assert_eq!(app.input, "   ");
    }

    #[test]
    fn test_edit_selected_task() {
        let mut app = create_test_app();
        app.selected_task = 1;

        TodoHandler::new(&mut app).begin_edit();
        assert_eq!(app.todo_mode, TodoInputMode::Editing(TaskId(1)));
        assert_eq!(app.input, "Watch a puppet show");

        app.input = "Watch two puppet shows".to_string();
        TodoHandler::new(&mut app).submit_input();

        assert_eq!(app.todo_mode, TodoInputMode::Adding);
        assert_eq!(app.todos.tasks()[1].text, "Watch two puppet shows");
        assert_eq!(app.todos.tasks().len(), 3);
    }

    #[test]
    fn test_cancel_edit_clears_input() {
        let mut app = create_test_app();

        TodoHandler::new(&mut app).begin_edit();
        TodoHandler::new(&mut app).cancel_edit();

        assert_eq!(app.todo_mode, TodoInputMode::Adding);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_toggle_and_delete_selected() {
        let mut app = create_test_app();
        app.selected_task = 2;

        TodoHandler::new(&mut app).toggle_selected();
        assert!(app.todos.tasks()[2].done);

        TodoHandler::new(&mut app).delete_selected();
        assert_eq!(app.todos.tasks().len(), 2);
        assert_eq!(app.selected_task, 1);
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let mut app = create_test_app();
        for _ in 0..3 {
            TodoHandler::new(&mut app).delete_selected();
        }
        assert!(app.todos.tasks().is_empty());

        TodoHandler::new(&mut app).delete_selected();
        TodoHandler::new(&mut app).toggle_selected();
        assert_eq!(app.selected_task, 0);
    }
}

#[cfg(test)]
mod rendering_tests {
    use super::*;

    #[test]
    fn test_game_screen_renders_moves_and_status() {
        let mut app = create_test_app();
        GameHandler::new(&mut app).play_cell(0);
        GameHandler::new(&mut app).jump_to(0);

        let screen = render(&app);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("You are at game start"));
        assert!(screen.contains("Go to move #1"));
    }

    #[test]
    fn test_board_highlights_only_winning_cells() {
        let mut app = create_test_app();
        // X wins the top row; the X at cell 6 is not part of the line.
        for cell in [0, 3, 1, 4, 6, 8, 2] {
            GameHandler::new(&mut app).play_cell(cell);
        }

        let buffer = render_buffer(&app);
        let width = buffer.area.width as usize;
        let highlighted: Vec<(usize, &str)> = buffer
            .content
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.bg == Color::Green)
            .map(|(i, cell)| (i / width, cell.symbol()))
            .collect();

        let marks: Vec<&str> = highlighted
            .iter()
            .map(|&(_, symbol)| symbol)
            .filter(|symbol| !symbol.trim().is_empty())
            .collect();
        assert_eq!(marks, vec!["X", "X", "X"]);
        assert!(highlighted.iter().all(|&(row, _)| row == highlighted[0].0));

        // Before the winning move nothing is highlighted.
        GameHandler::new(&mut app).jump_to(6);
        let buffer = render_buffer(&app);
        assert!(buffer.content.iter().all(|cell| cell.bg != Color::Green));
    }

    #[test]
    fn test_products_screen_renders_rows() {
        let mut app = create_test_app();
        app.screen = Screen::Products;
        app.filter.in_stock_only = true;

        let screen = render(&app);
        assert!(screen.contains("Fruits"));
        assert!(screen.contains("Spinach"));
        assert!(!screen.contains("Pumpkin"));
    }

    #[test]
    fn test_todos_screen_renders_tasks() {
        let mut app = create_test_app();
        app.screen = Screen::Todos;

        let screen = render(&app);
        assert!(screen.contains("Visit Kafka Museum"));
        assert!(screen.contains("2 left"));
    }
}
