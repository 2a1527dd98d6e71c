//! Command-line runner: load a raw machine-code image, execute it under a
//! cycle budget, and report how the run ended.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use emu6502::{CPU, FlatMemory, Halt};

#[derive(Parser)]
#[command(name = "emu6502", about = "Cycle-counting 6502 emulator")]
struct Args {
    /// Raw machine-code image to load
    input: PathBuf,

    /// Load address and initial program counter
    #[arg(long, default_value = "0x0100", value_parser = parse_address)]
    start: u16,

    /// Cycle budget for the run
    #[arg(long, default_value_t = 65536)]
    cycles: i64,

    /// Print registers and flags after the run
    #[arg(long)]
    show_status: bool,

    /// Write the final 64KB memory image to this file
    #[arg(long)]
    dump: Option<PathBuf>,
}

fn parse_address(s: &str) -> Result<u16, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid address {:?}: {}", s, e))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let image = fs::read(&args.input)
        .with_context(|| format!("failed to read image {}", args.input.display()))?;

    let mut memory = FlatMemory::new();
    memory
        .load_image(&image, args.start)
        .with_context(|| format!("failed to load image at 0x{:04X}", args.start))?;

    let mut cpu = CPU::new(memory, args.cycles);
    let halt = cpu.execute(args.start);

    match halt {
        Halt::CyclesExhausted => println!("halted: {}", halt),
        Halt::UndefinedOpcode(_) | Halt::Jam(_) => {
            println!("halted: {} at pc 0x{:04X}", halt, cpu.pc())
        }
    }

    if args.show_status {
        println!(
            "a=0x{:02X} x=0x{:02X} y=0x{:02X} pc=0x{:04X} sp=0x{:04X}",
            cpu.a(),
            cpu.x(),
            cpu.y(),
            cpu.pc(),
            cpu.sp()
        );
        println!(
            "flags: n={} v={} b={} d={} i={} z={} c={} (status=0x{:02X})",
            cpu.flag_n() as u8,
            cpu.flag_v() as u8,
            cpu.flag_b() as u8,
            cpu.flag_d() as u8,
            cpu.flag_i() as u8,
            cpu.flag_z() as u8,
            cpu.flag_c() as u8,
            cpu.status()
        );
    }

    if let Some(path) = &args.dump {
        fs::write(path, cpu.memory().dump())
            .with_context(|| format!("failed to write dump {}", path.display()))?;
    }

    Ok(())
}
