use std::io::Cursor;
use tictac::protocol::{ProtocolEngine, Response};
use tictac::Error;

fn text(r: Response) -> String {
    match r {
        Response::Text(s) => s,
        Response::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn go_reports_best_move_without_playing_it() {
    let mut e = ProtocolEngine::new();
    assert_eq!(text(e.handle_line("position XX_/OO_/___ ai").unwrap()), "ok");
    let reply = text(e.handle_line("go").unwrap());
    assert!(reply.starts_with("bestmove 2 score 10 nodes "), "{reply}");
    assert_eq!(e.game().board().to_compact(), "XX_OO____");
}

#[test]
fn position_infers_side_to_move() {
    let mut e = ProtocolEngine::new();
    e.handle_line("position X________").unwrap();
    assert_eq!(e.game().to_move(), tictac::Player::Human);
    e.handle_line("position XO_______").unwrap();
    assert_eq!(e.game().to_move(), tictac::Player::Ai);
}

#[test]
fn play_and_status() {
    let mut e = ProtocolEngine::new();
    e.handle_line("position XX_/OO_/___").unwrap();
    assert_eq!(text(e.handle_line("play 2").unwrap()), "status ai_won");
    assert_eq!(text(e.handle_line("status").unwrap()), "status ai_won");
    assert_eq!(text(e.handle_line("go").unwrap()), "bestmove none score 10 nodes 1");
    assert!(matches!(e.handle_line("play 5"), Err(Error::GameOver { .. })));
    assert_eq!(text(e.handle_line("new").unwrap()), "ok");
    assert_eq!(text(e.handle_line("status").unwrap()), "status in_progress");
}

#[test]
fn malformed_commands_are_errors() {
    let mut e = ProtocolEngine::new();
    assert!(matches!(e.handle_line("fly"), Err(Error::UnknownCommand { .. })));
    assert!(matches!(e.handle_line("play"), Err(Error::MissingArgument { .. })));
    assert!(matches!(e.handle_line("play x"), Err(Error::InvalidArgument { .. })));
    assert!(matches!(e.handle_line("position XX"), Err(Error::InvalidBoardLength { .. })));
    assert!(matches!(e.handle_line("position XX_OO____ z"), Err(Error::InvalidPlayer { .. })));
}

#[test]
fn run_loop_writes_replies_until_quit() {
    let input = "position XX_/OO_/___ ai\n\nshow\nbogus\nquit\ngo\n";
    let mut out = Vec::new();
    ProtocolEngine::new().run(Cursor::new(input), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    pretty_assertions::assert_eq!(out, "ok\nXX2\nOO5\n678\nerror unknown command 'bogus'\n");
}
