use catalog_core::{Msg, OfferFilter, ProductId};

pub const HELP: &str = "\
Commands:
  list                      reload products from the server
  name <text>               set the form name
  price <text>              set the form price
  offer on|off              set the form offer flag
  submit                    create or update with the form values
  edit <id>                 load a listed product into the form
  cancel                    leave edit mode and clear the form
  delete <id>               ask to delete a product
  yes | no                  answer the delete confirmation
  search [text]             filter the list by name (empty clears)
  filter all|offers|regular filter the list on the server by offer flag
  find <id>                 look up a single product by id
  clear-find                hide the lookup result
  dismiss                   close the notification
  help                      show this help
  quit                      exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Invalid(String),
}

/// Parses one input line. Blank lines map to `Msg::NoOp`.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    let msg = match word.to_ascii_lowercase().as_str() {
        "" => Msg::NoOp,
        "help" | "?" => return Command::Help,
        "quit" | "exit" => return Command::Quit,
        "list" | "reload" => Msg::LoadRequested,
        "name" => Msg::NameChanged(rest.to_string()),
        "price" => Msg::PriceChanged(rest.to_string()),
        "offer" => match parse_flag(rest) {
            Some(flag) => Msg::OfferToggled(flag),
            None => return Command::Invalid(format!("expected on or off, got '{rest}'")),
        },
        "submit" | "save" => Msg::SubmitClicked,
        "edit" => match parse_id(rest) {
            Ok(id) => Msg::EditClicked(id),
            Err(reason) => return Command::Invalid(reason),
        },
        "cancel" => Msg::CancelEditClicked,
        "delete" | "rm" => match parse_id(rest) {
            Ok(id) => Msg::DeleteClicked(id),
            Err(reason) => return Command::Invalid(reason),
        },
        "yes" | "y" => Msg::DeleteConfirmed,
        "no" | "n" => Msg::DeleteCancelled,
        "search" => Msg::SearchChanged(rest.to_string()),
        "filter" => match rest.to_ascii_lowercase().as_str() {
            "all" => Msg::OfferFilterChanged(OfferFilter::All),
            "offers" => Msg::OfferFilterChanged(OfferFilter::OffersOnly),
            "regular" => Msg::OfferFilterChanged(OfferFilter::RegularOnly),
            other => {
                return Command::Invalid(format!(
                    "expected all, offers or regular, got '{other}'"
                ))
            }
        },
        "find" => match parse_id(rest) {
            Ok(id) => Msg::LookupRequested(id),
            Err(reason) => return Command::Invalid(reason),
        },
        "clear-find" => Msg::LookupCleared,
        "dismiss" => Msg::NotificationDismissed,
        other => return Command::Invalid(format!("unknown command '{other}', try 'help'")),
    };
    Command::Dispatch(msg)
}

fn parse_id(text: &str) -> Result<ProductId, String> {
    let text = text.trim().trim_start_matches('#');
    text.parse::<ProductId>()
        .map_err(|_| format!("expected a product id, got '{text}'"))
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Some(true),
        "off" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_commands_keep_inner_spaces() {
        assert_eq!(
            parse_command("name   Laptop Gaming  \n"),
            Command::Dispatch(Msg::NameChanged("Laptop Gaming".to_string()))
        );
        assert_eq!(
            parse_command("price 999,99"),
            Command::Dispatch(Msg::PriceChanged("999,99".to_string()))
        );
        assert_eq!(
            parse_command("search"),
            Command::Dispatch(Msg::SearchChanged(String::new()))
        );
    }

    #[test]
    fn ids_accept_hash_prefix() {
        assert_eq!(parse_command("edit #3"), Command::Dispatch(Msg::EditClicked(3)));
        assert_eq!(parse_command("DELETE 4"), Command::Dispatch(Msg::DeleteClicked(4)));
        assert!(matches!(parse_command("find x"), Command::Invalid(_)));
    }

    #[test]
    fn confirmation_and_control_words() {
        assert_eq!(parse_command("y"), Command::Dispatch(Msg::DeleteConfirmed));
        assert_eq!(parse_command("no"), Command::Dispatch(Msg::DeleteCancelled));
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("   "), Command::Dispatch(Msg::NoOp));
    }

    #[test]
    fn offer_and_filter_arguments_are_checked() {
        assert_eq!(
            parse_command("offer on"),
            Command::Dispatch(Msg::OfferToggled(true))
        );
        assert_eq!(
            parse_command("filter offers"),
            Command::Dispatch(Msg::OfferFilterChanged(OfferFilter::OffersOnly))
        );
        assert!(matches!(parse_command("offer maybe"), Command::Invalid(_)));
        assert!(matches!(parse_command("filter cheap"), Command::Invalid(_)));
        assert!(matches!(parse_command("frobnicate"), Command::Invalid(_)));
    }
}
