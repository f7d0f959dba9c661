//! Palette file reader and writer.
//!
//! Custom colours are stored as XML:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <palette>
//!   <custom>
//!     <colour r="26" g="43" b="60" a="255" name="slate"/>
//!   </custom>
//! </palette>
//! ```
//!
//! Elements other than `colour` are ignored, as are `colour` elements
//! outside `custom`.

use std::fmt::Write as _;

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, SwatchError};
use crate::types::{Colour, Swatch};

/// Parse the custom colour entries of a palette file.
pub fn parse_palette_file(source: &str) -> Result<Vec<Swatch>> {
    let mut xml = Reader::from_str(source);
    xml.config_mut().trim_text(true);

    let mut swatches = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut saw_root = false;

    loop {
        match xml.read_event() {
            Ok(Event::Start(e)) => {
                let name = element_name(&e);
                if stack.is_empty() {
                    check_root(&name)?;
                    saw_root = true;
                }
                if name == "colour" && in_custom(&stack) {
                    swatches.push(parse_colour_element(&xml, &e)?);
                }
                stack.push(name);
            }
            Ok(Event::Empty(e)) => {
                let name = element_name(&e);
                if stack.is_empty() {
                    check_root(&name)?;
                    saw_root = true;
                }
                if name == "colour" && in_custom(&stack) {
                    swatches.push(parse_colour_element(&xml, &e)?);
                }
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SwatchError::Parse {
                    message: format!(
                        "XML error at byte {}: {}",
                        xml.error_position(),
                        e
                    ),
                    help: None,
                })
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(SwatchError::Parse {
            message: format!("Unclosed element <{}>", stack.join("><")),
            help: None,
        });
    }

    if !saw_root {
        return Err(SwatchError::Parse {
            message: "Palette file has no <palette> element".to_string(),
            help: Some("Expected <palette><custom>...</custom></palette>".to_string()),
        });
    }

    Ok(swatches)
}

/// Serialize custom colours into palette file text.
pub fn write_palette_file(swatches: &[Swatch]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<palette>\n");
    out.push_str("  <custom>\n");
    for swatch in swatches {
        let c = swatch.colour;
        let _ = write!(
            out,
            "    <colour r=\"{}\" g=\"{}\" b=\"{}\" a=\"{}\"",
            c.r(),
            c.g(),
            c.b(),
            c.a()
        );
        if let Some(name) = &swatch.name {
            let _ = write!(out, " name=\"{}\"", escape(name.as_str()));
        }
        out.push_str("/>\n");
    }
    out.push_str("  </custom>\n");
    out.push_str("</palette>\n");
    out
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_string()
}

fn in_custom(stack: &[String]) -> bool {
    stack.last().is_some_and(|s| s == "custom")
}

fn check_root(name: &str) -> Result<()> {
    if name == "palette" {
        Ok(())
    } else {
        Err(SwatchError::Parse {
            message: format!("Unexpected root element <{}>", name),
            help: Some("Palette files start with <palette>".to_string()),
        })
    }
}

fn parse_colour_element(xml: &Reader<&[u8]>, e: &BytesStart) -> Result<Swatch> {
    let mut r = None;
    let mut g = None;
    let mut b = None;
    let mut a = None;
    let mut name = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|e| SwatchError::Parse {
            message: format!("Bad attribute on <colour>: {}", e),
            help: None,
        })?;
        let value = attr
            .decode_and_unescape_value(xml.decoder())
            .map_err(|e| SwatchError::Parse {
                message: format!("Bad attribute value on <colour>: {}", e),
                help: None,
            })?;

        match attr.key.as_ref() {
            b"r" => r = Some(parse_channel("r", &value)?),
            b"g" => g = Some(parse_channel("g", &value)?),
            b"b" => b = Some(parse_channel("b", &value)?),
            b"a" => a = Some(parse_channel("a", &value)?),
            b"name" => name = Some(value.into_owned()).filter(|n| !n.is_empty()),
            _ => {}
        }
    }

    let (Some(r), Some(g), Some(b)) = (r, g, b) else {
        return Err(SwatchError::Parse {
            message: "<colour> needs r, g and b attributes".to_string(),
            help: None,
        });
    };

    Ok(Swatch {
        colour: Colour::new(r, g, b, a.unwrap_or(255)),
        name,
    })
}

fn parse_channel(key: &str, value: &str) -> Result<u8> {
    value.trim().parse().map_err(|_| SwatchError::Parse {
        message: format!("Invalid {} channel: {:?}", key, value),
        help: Some("Channels are integers from 0 to 255".to_string()),
    })
}
