use clap::{arg, command, Parser, Subcommand};
use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    execute,
    style::{Attribute, Color as TermColor, SetBackgroundColor, Stylize},
};
use log::LevelFilter;
use spinners::Spinner;
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};
use twophase::{
    constants::DEFAULT_MAX_DEPTH,
    cubie::CubieCube,
    error::Error,
    facelet::{Color, FaceCube},
    scramble::{gen_scramble, random_state, scramble_to_str, turns_from_str},
    solver::{default_solver, Solver},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "solves the cube using two-phase algorithm")]
    #[clap(group(
    clap::ArgGroup::new("state")
        .required(true)
        .args(&["scramble", "facelet"]),
    ))]
    Solve {
        /// moves and x, y, z rotations applied to a solved cube
        #[arg(short, long)]
        scramble: Option<String>,

        /// 54 facelets in U, R, F, D, L, B order
        #[arg(short, long)]
        facelet: Option<String>,

        #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
        max: usize,

        /// seconds to wait for the search once the tables are built
        #[arg(short, long, default_value_t = 60.0)]
        timeout: f32,

        #[arg(short, long)]
        verbose: bool,

        #[arg(short, long)]
        preview: bool,
    },

    #[command(about = "generates scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 20)]
        length: usize,

        /// print the facelets of a random state instead of a move sequence
        #[arg(short, long)]
        state: bool,

        #[arg(short, long)]
        preview: bool,
    },
}

fn solve(
    scramble: &Option<String>,
    facelet: &Option<String>,
    max: usize,
    timeout: f32,
    preview: bool,
) -> Result<(), Error> {
    let state = if let Some(scramble) = scramble {
        let mut state = CubieCube::default();
        state.apply_turns(&turns_from_str(scramble)?);
        state
    } else if let Some(facelet) = facelet {
        CubieCube::from_facelets(facelet)?
    } else {
        return Ok(());
    };
    if preview {
        print_facelet(&FaceCube::from(&state))?;
    }
    solve_state(&state, max, timeout)
}

fn solve_state(state: &CubieCube, max: usize, timeout: f32) -> Result<(), Error> {
    let start = Instant::now();
    let mut spinner = Spinner::new(spinners::Spinners::Dots, "Solving".to_owned());
    let result = Solver::solve_timeout(
        default_solver(),
        state,
        max,
        Duration::from_secs_f32(timeout),
    );
    spinner.stop_with_newline();
    let result = result?;

    println!("Solution: {}", result);
    println!("Move count: {}", result.len());
    println!("Solve time: {:?}", result.solve_time);
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}

fn color_to_termcolor(color: Color) -> TermColor {
    match color {
        Color::U => TermColor::White,
        Color::R => TermColor::Red,
        Color::F => TermColor::Green,
        Color::D => TermColor::Yellow,
        Color::L => TermColor::DarkYellow,
        Color::B => TermColor::Blue,
    }
}

fn print_face(face: &[Color], offset: u16) -> Result<(), io::Error> {
    for i in 0..3 {
        let layer = format!(
            "{}  {}  {}  {}",
            SetBackgroundColor(color_to_termcolor(face[3 * i])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 1])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 2])),
            SetBackgroundColor(TermColor::Reset)
        );

        println!("{layer}");

        if offset != 0 {
            execute!(stdout(), MoveRight(offset))?;
        }
    }

    Ok(())
}

/// Print the net of the cube, L F R B in a row with U above and D below F.
fn print_facelet(facelet: &FaceCube) -> Result<(), io::Error> {
    let stdout = stdout();

    println!();
    execute!(&stdout, MoveRight(6))?;
    print_face(&facelet.f[0..9], 6)?;
    execute!(&stdout, MoveLeft(6))?;
    print_face(&facelet.f[36..45], 0)?;
    execute!(&stdout, MoveRight(6), MoveUp(3))?;
    print_face(&facelet.f[18..27], 6)?;
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(12))?;
    print_face(&facelet.f[9..18], 12)?;
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(18))?;
    print_face(&facelet.f[45..54], 18)?;
    execute!(&stdout, MoveLeft(12))?;
    print_face(&facelet.f[27..36], 6)?;
    execute!(&stdout, MoveLeft(12))?;
    println!();

    Ok(())
}

fn scramble(length: usize, state: bool, preview: bool) -> Result<(), Error> {
    let cc = if state {
        let cc = random_state();
        println!("State: {}", cc);
        cc
    } else {
        let ss = gen_scramble(length);
        println!("Scramble: {}", scramble_to_str(&ss));
        CubieCube::from(&ss)
    };
    if preview {
        print_facelet(&FaceCube::from(&cc))?;
    }
    Ok(())
}

fn main() {
    let program = Cli::parse();

    let verbose = matches!(program.command, Some(Commands::Solve { verbose: true, .. }));
    env_logger::Builder::from_default_env()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let result = match &program.command {
        Some(Commands::Solve {
            scramble,
            facelet,
            max,
            timeout,
            preview,
            ..
        }) => solve(scramble, facelet, *max, *timeout, *preview),
        Some(Commands::Scramble {
            length,
            state,
            preview,
        }) => scramble(*length, *state, *preview),
        _ => Ok(()),
    };

    if let Err(error) = result {
        let styled = "Error:".with(TermColor::Red).attribute(Attribute::Bold);
        println!("{styled} {error}");
    }
}
