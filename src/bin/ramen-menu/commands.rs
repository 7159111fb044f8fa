use ramen_menu::data::{NewRamen, NewRamenBuilder};
use ramen_menu::view::Page;
use ramen_menu::{Catalog, RamenApi};

pub(super) const USAGE: &str = "\
Usage:
  list                     show the menu and the selected ramen
  show <n>                 select menu entry n
  new name=<..> restaurant=<..> image=<..> rating=<..> comment=<..>
  edit <rating> [comment]  update the selected ramen
  delete                   delete the selected ramen
  help
  quit";

#[derive(Debug, PartialEq)]
pub(super) enum MenuAction {
    List,
    Show(usize),
    New(NewRamen),
    Edit(String, String),
    Delete,
    Help,
    Quit,
}

impl MenuAction {
    /// Values after the command are kept as typed, spaces included.
    pub(super) fn new(line: &str) -> Result<Self, &'static str> {
        let line = line.trim_start();
        let (cmd, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match cmd {
            "" => Err("empty command"),
            "list" | "ls" => Ok(Self::List),
            "show" => {
                let arg = args.trim();
                if arg.is_empty() {
                    return Err("too less argument");
                }
                let Ok(n) = arg.parse::<usize>() else {
                    return Err("Can not parse your argument into number");
                };
                if n == 0 {
                    return Err("menu entries start at 1");
                }
                Ok(Self::Show(n - 1))
            }
            "new" => parse_form(args).map(Self::New),
            "edit" => {
                if args.is_empty() {
                    return Err("too less argument");
                }
                let (rating, comment) = args.split_once(' ').unwrap_or((args, ""));
                Ok(Self::Edit(rating.to_string(), comment.to_string()))
            }
            "delete" | "rm" => Ok(Self::Delete),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err("unexpected command"),
        }
    }

    // consumed the action
    pub(super) async fn run<A: RamenApi>(
        self,
        catalog: &mut Catalog<A, Page>,
    ) -> anyhow::Result<String> {
        let out = match self {
            Self::List => catalog.view().to_string(),
            Self::Show(index) => {
                let Some(ramen) = catalog.view().activate(index) else {
                    return Ok(format!("No menu entry {}", index + 1));
                };
                catalog.select(ramen);
                catalog.view().to_string()
            }
            Self::New(draft) => {
                catalog.view_mut().create_form = draft.clone();
                let ramen = catalog.create(draft).await?;
                format!("Added {} (id {}).\n{}", ramen.name, ramen.id, catalog.view())
            }
            Self::Edit(rating, comment) => {
                let ramen = catalog.edit(&rating, &comment).await?;
                format!("Updated {}: {} / {}", ramen.name, ramen.rating, ramen.comment)
            }
            Self::Delete => {
                let removed = catalog.delete().await?;
                format!("Deleted, {removed} menu entries removed.\n{}", catalog.view())
            }
            Self::Help => USAGE.to_string(),
            Self::Quit => String::new(),
        };
        Ok(out)
    }
}

const FORM_KEYS: [&str; 5] = ["name", "restaurant", "image", "rating", "comment"];

/// `key=value` pairs. A field starts at `key=` after a space, each key once, and a value runs
/// up to the space before the next field. `comment` takes the rest of the line.
fn parse_form(input: &str) -> Result<NewRamen, &'static str> {
    let input = input.trim_start();
    let bytes = input.as_bytes();

    let mut fields: Vec<(&str, usize)> = Vec::new();
    for i in 0..input.len() {
        if i > 0 && bytes[i - 1] != b' ' {
            continue;
        }
        let found = FORM_KEYS.iter().find(|key| {
            input[i..].starts_with(*key)
                && input[i + key.len()..].starts_with('=')
                && !fields.iter().any(|(seen, _)| seen == *key)
        });
        if let Some(&key) = found {
            fields.push((key, i));
            if key == "comment" {
                break;
            }
        }
    }

    match fields.first() {
        None if !input.is_empty() => {
            return Err("expect key=value, key is one of name, restaurant, image, rating, comment");
        }
        Some((_, start)) if *start != 0 => return Err("expect the line to start with key=value"),
        _ => (),
    }

    let mut builder = NewRamenBuilder::default();
    for (n, &(key, start)) in fields.iter().enumerate() {
        let end = fields
            .get(n + 1)
            .map(|&(_, next)| next - 1)
            .unwrap_or(input.len());
        let value = &input[start + key.len() + 1..end];
        match key {
            "name" => builder.name(value),
            "restaurant" => builder.restaurant(value),
            "image" => builder.image(value),
            "rating" => builder.rating(value),
            _ => builder.comment(value),
        };
    }
    builder.build().map_err(|_| "fail to build the new ramen")
}
