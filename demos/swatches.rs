use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use huelog::{generate, preset_dark_palettes, preset_palettes, to_hex,
             Options, Ramp};

type Err = Box<dyn Error>;

/// Black or white, whichever reads better on `c`.
fn text_on(c: RGB8) -> &'static str {
    let y = 0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64;
    if y > 140. { "#000" } else { "#fff" }
}

fn table_of_ramp(fh: &mut impl Write, ramp: &Ramp, background: &str,
                 comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px; \
                  background-color: {background}\"><tr>")?;
    for c in ramp.iter() {
        writeln!(fh, "  <td style=\"width: 70px; height: 30px; \
                      background-color: {0}; color: {1}; \
                      font: 10px monospace; text-align: center\">{0}</td>",
                 to_hex(c), text_on(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px; color: gray\">\
                  {comment}</td></tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>huelog: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Presets</h3>")?;
    for (p, ramp) in preset_palettes() {
        table_of_ramp(&mut fh, ramp, "#fff", p.name())?;
    }

    writeln!(fh, "<h3>Presets (dark)</h3>")?;
    for (p, ramp) in preset_dark_palettes() {
        table_of_ramp(&mut fh, ramp, "#141414", p.name())?;
    }

    // Seeds given on the command line, e.g. `swatches '#00b96b' teal`.
    let seeds: Vec<String> = env::args().skip(1).collect();
    if !seeds.is_empty() {
        writeln!(fh, "<h3>Custom</h3>")?;
        for seed in &seeds {
            table_of_ramp(&mut fh, &generate(seed, &Options::default())?,
                          "#fff", seed)?;
            table_of_ramp(&mut fh, &generate(seed, &Options::dark())?,
                          "#141414", &format!("{seed} (dark)"))?;
        }
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
