fn main() {
    log::info!("Chess move checker - terminal");
    chess_move_core::terminal::run_interactive_terminal();
}
