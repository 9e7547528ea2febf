//! Walkthrough of BitSequence editing.
//!
//! Run with `cargo run --example bit_editing`, optionally piping bit strings
//! on stdin: `echo "1011 0001" | cargo run --example bit_editing`.

use anyhow::{Context, Result};
use bitseq::{BitSeqError, BitSequence};
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    let mut seq = BitSequence::from_bit_str("111").context("parsing seed sequence")?;
    println!("start:               {}", seq);

    seq.insert(1, false)?;
    println!("insert 0 at 1:       {}", seq);

    seq.bit_mut(3)?.set(false);
    println!("clear bit 3:         {}", seq);

    seq.append(&"0110".parse()?);
    println!("append 0110:         {}", seq);

    seq.shift_toward_high_index(2)?;
    println!("shift toward high 2: {}", seq);

    seq.erase(0, 2)?;
    println!("erase first 2:       {} (capacity {} bits)", seq, seq.capacity());

    seq.shrink_to_fit();
    println!("shrink_to_fit:       capacity {} bits", seq.capacity());

    println!("complement:          {}", !&seq);
    println!("ones / zeros:        {} / {}", seq.count_ones(), seq.count_zeros());

    match BitSequence::from_bit_str("10b1") {
        Err(e) => println!("parse 10b1:          {}", e),
        Ok(s) => println!("parse 10b1:          unexpectedly parsed {}", s),
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut reader = stdin.lock();
        let mut previous: Option<BitSequence> = None;
        loop {
            let mut next = BitSequence::new();
            match next.read_from(&mut reader) {
                Ok(()) => {}
                Err(BitSeqError::EndOfData) => break,
                Err(e) => return Err(e).context("reading stdin"),
            }
            if let Some(prev) = &previous {
                println!("{} vs {}: {:?}", prev, next, prev.compare(&next)?);
            } else {
                println!("read: {}", next);
            }
            previous = Some(next);
        }
    }

    Ok(())
}
