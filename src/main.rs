//! wirebuf - Throughput Demo
//!
//! Mengukur latency accessor absolute, cursor, dan satu siklus
//! fill → flip → drain pada buffer yang sama.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]

use std::process;
use std::time::Instant;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use wirebuf::{BufferResult, ByteBuffer};

/// Demo configuration
struct DemoConfig {
    capacity: usize,
    iterations: usize,
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            capacity: 1024 * 1024,
            iterations: 1_000_000,
            verbose: false,
        }
    }
}

/// Satu record campuran: u8 + u16 + i32 + u64
const RECORD_SIZE: usize = 1 + 2 + 4 + 8;

fn main() {
    let config = parse_args();
    init_logging(config.verbose);

    println!("🚀 wirebuf ByteBuffer - Throughput Demo");
    println!("=======================================\n");

    if let Err(e) = run(&config) {
        error!(error = %e, "demo aborted");
        eprintln!("❌ {}", e);
        process::exit(1);
    }

    println!("\n✅ All benchmarks complete!");
}

fn run(config: &DemoConfig) -> BufferResult<()> {
    let mut buf = ByteBuffer::new(config.capacity)?;
    debug!(?buf, "demo buffer ready");

    benchmark_absolute(&mut buf, config.iterations);
    benchmark_cursor(&mut buf, config.iterations);
    benchmark_staging_cycle(&mut buf, config.iterations);

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn benchmark_absolute(buf: &mut ByteBuffer, iterations: usize) {
    println!("📊 Absolute Accessors (put_u64/get_u64)");
    println!("---------------------------------------");

    let slots = (buf.capacity() / 8).max(1);
    if buf.capacity() < 8 {
        println!("  Skipped: capacity < 8 bytes\n");
        return;
    }

    let start = Instant::now();
    for i in 0..iterations {
        buf.put_u64((i % slots) * 8, i as u64);
    }
    let put_duration = start.elapsed();

    let mut checksum = 0u64;
    let start = Instant::now();
    for i in 0..iterations {
        checksum = checksum.wrapping_add(buf.get_u64((i % slots) * 8));
    }
    let get_duration = start.elapsed();

    print_latency("put_u64", put_duration.as_nanos(), iterations);
    print_latency("get_u64", get_duration.as_nanos(), iterations);
    println!("  Checksum: {:#018x}\n", checksum);
}

fn benchmark_cursor(buf: &mut ByteBuffer, iterations: usize) {
    println!("📊 Cursor Accessors (write_u32/read_u32)");
    println!("----------------------------------------");

    if buf.capacity() < 4 {
        println!("  Skipped: capacity < 4 bytes\n");
        return;
    }

    buf.reset();
    let start = Instant::now();
    for i in 0..iterations {
        if buf.remaining() < 4 {
            buf.reset();
        }
        buf.write_u32(i as u32);
    }
    let write_duration = start.elapsed();

    buf.flip();
    let mut checksum = 0u32;
    let start = Instant::now();
    for _ in 0..iterations {
        if buf.remaining() < 4 {
            buf.set_offset(0);
        }
        checksum = checksum.wrapping_add(buf.read_u32());
    }
    let read_duration = start.elapsed();

    print_latency("write_u32", write_duration.as_nanos(), iterations);
    print_latency("read_u32", read_duration.as_nanos(), iterations);
    println!("  Checksum: {:#010x}\n", checksum);
}

fn benchmark_staging_cycle(buf: &mut ByteBuffer, iterations: usize) {
    println!("📊 Staging Cycle (fill → flip → drain)");
    println!("--------------------------------------");

    let records_per_fill = buf.capacity() / RECORD_SIZE;
    if records_per_fill == 0 {
        println!("  Skipped: capacity < {} bytes\n", RECORD_SIZE);
        return;
    }

    let mut records = 0usize;
    let mut cycles = 0usize;
    let start = Instant::now();
    while records < iterations {
        buf.reset();
        let batch = records_per_fill.min(iterations - records);
        for i in 0..batch {
            let seq = (records + i) as u64;
            buf.write_u8(1);
            buf.write_u16(RECORD_SIZE as u16);
            buf.write_i32(-(i as i32));
            buf.write_u64(seq);
        }

        buf.flip();
        while buf.remaining() >= RECORD_SIZE {
            let _kind = buf.read_u8();
            let _len = buf.read_u16();
            let _delta = buf.read_i32();
            let _seq = buf.read_u64();
        }

        records += batch;
        cycles += 1;
    }
    let duration = start.elapsed();

    println!("  Record size: {} bytes", RECORD_SIZE);
    println!("  Fill/drain cycles: {}", cycles);
    print_latency("record", duration.as_nanos(), records);
    println!(
        "  Throughput: {:.2} MB/sec",
        (records * RECORD_SIZE) as f64 / duration.as_secs_f64() / 1_000_000.0
    );
}

fn print_latency(label: &str, total_ns: u128, ops: usize) {
    let ns = total_ns as f64 / ops.max(1) as f64;
    println!("  {:<10} {:.2} ns/op ({:.3} μs/op)", label, ns, ns / 1000.0);
}

fn parse_args() -> DemoConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--capacity" | "-c" => {
                if i + 1 < args.len() {
                    config.capacity = args[i + 1].parse().unwrap_or(1024 * 1024);
                    i += 1;
                }
            }
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("wirebuf - Fixed-Capacity Big-Endian Byte Buffer Demo\n");
                println!("Usage: wirebuf [OPTIONS]\n");
                println!("Options:");
                println!("  -c, --capacity <BYTES>  Buffer capacity (default: 1048576)");
                println!("  -n, --iterations <N>    Operations per benchmark (default: 1000000)");
                println!("  -v, --verbose           Trace-level logging (RUST_LOG overrides)");
                println!("  -h, --help              Show this help");
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}
