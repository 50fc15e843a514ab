use festival_bot::bot::commands::{parse_add_arguments, parse_command, Command};
use festival_bot::error::FestivalError;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_simple_commands_parsing() {
        let cases = [
            ("/help", Command::Help),
            ("/start", Command::Start),
            ("/login", Command::Login),
            ("/users", Command::Users),
            ("/festivals", Command::Festivals),
            ("/attendance", Command::Attendance),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_command(input, "testbot"), Some(expected), "input: {input}");
        }
    }

    #[test]
    fn test_command_names_are_case_insensitive() {
        assert_eq!(parse_command("/LOGIN", "testbot"), Some(Command::Login));
        assert_eq!(parse_command("/Festivals", "testbot"), Some(Command::Festivals));
        assert_eq!(
            parse_command("/Attend Wacken", "testbot"),
            Some(Command::Attend("Wacken".to_string()))
        );
    }

    #[test]
    fn test_attendance_commands_take_the_rest_of_the_line() {
        assert_eq!(
            parse_command("/attend Rock am Ring", "testbot"),
            Some(Command::Attend("Rock am Ring".to_string()))
        );
        assert_eq!(
            parse_command("/unattend wack", "testbot"),
            Some(Command::Unattend("wack".to_string()))
        );
        assert_eq!(
            parse_command("/maybe  Summer Breeze", "testbot"),
            Some(Command::Maybe("Summer Breeze".to_string()))
        );
        assert_eq!(
            parse_command("/ticket Fusion", "testbot"),
            Some(Command::Ticket("Fusion".to_string()))
        );
        assert_eq!(
            parse_command("/attendees Wacken", "testbot"),
            Some(Command::Attendees("Wacken".to_string()))
        );
    }

    #[test]
    fn test_add_command_with_newline_arguments() {
        let input = "/add\nWacken\n2.8\n5.8\nhttps://www.wacken.com";
        let command = parse_command(input, "testbot");

        match command {
            Some(Command::Add(args)) => {
                let festival = parse_add_arguments(&args, 2023).unwrap();
                assert_eq!(festival.name, "Wacken");
                assert_eq!(festival.link.as_deref(), Some("https://www.wacken.com"));
            }
            other => panic!("expected /add, got {other:?}"),
        }
    }

    #[test]
    fn test_add_command_with_missing_lines_reports_usage() {
        let args = match parse_command("/add Wacken\n2.8", "testbot") {
            Some(Command::Add(args)) => args,
            other => panic!("expected /add, got {other:?}"),
        };

        assert!(matches!(
            parse_add_arguments(&args, 2023),
            Err(FestivalError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bot_mentions() {
        assert_eq!(parse_command("/login@testbot", "testbot"), Some(Command::Login));
        assert_eq!(
            parse_command("/attend@testbot Wacken", "testbot"),
            Some(Command::Attend("Wacken".to_string()))
        );
        assert_eq!(parse_command("/login@otherbot", "testbot"), None);
    }

    #[test]
    fn test_invalid_input_is_not_a_command() {
        assert_eq!(parse_command("login", "testbot"), None);
        assert_eq!(parse_command("/unknown", "testbot"), None);
        assert_eq!(parse_command("", "testbot"), None);
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::Attend("x".to_string()).name(), "attend");
        assert_eq!(Command::Attendees("x".to_string()).name(), "attendees");
        assert_eq!(Command::Add(String::new()).name(), "add");
        assert_eq!(Command::Help.name(), "help");
    }
}
