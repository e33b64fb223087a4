//! Private scalar randomness
//!
//! Two [`RandomSource`] implementations are provided: [`RngSource`] draws
//! from any `rand` CSPRNG (the operating system generator by default), and
//! [`CommandSource`] asks an external program such as `openssl rand -hex`.
//! Either way, a generator failure surfaces as
//! [`dhec_api::Error::RandomnessFailure`].

use crate::ec::Curve;
use crate::error::{validate, Error};
use dhec_api::{RandomSource, Result as ApiResult};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::process::Command;
use zeroize::Zeroizing;

/// Number of bytes needed to hold `bits` bits.
fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Clear the bits of `buf[0]` above the requested bit length.
fn mask_excess_bits(buf: &mut [u8], bits: usize) {
    let excess = buf.len() * 8 - bits;
    if let Some(first) = buf.first_mut() {
        *first &= 0xFF >> excess;
    }
}

fn check_bits(bits: usize) -> ApiResult<()> {
    validate::parameter(bits > 0, "random bits", "bit length must be positive")?;
    Ok(())
}

/// Random source backed by a `rand` cryptographically secure generator.
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngSource<R> {
    /// Wrap a CSPRNG.
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<OsRng> {
    /// The operating system generator.
    pub fn os() -> Self {
        RngSource::new(OsRng)
    }
}

impl<R: RngCore + CryptoRng> RandomSource for RngSource<R> {
    fn random_bits(&mut self, bits: usize) -> ApiResult<BigUint> {
        check_bits(bits)?;

        let mut buf = Zeroizing::new(vec![0u8; byte_len(bits)]);
        self.rng
            .try_fill_bytes(&mut buf)
            .map_err(|e| Error::randomness("rng source", e.to_string()))?;
        mask_excess_bits(&mut buf, bits);

        Ok(BigUint::from_bytes_be(&buf))
    }

    fn name(&self) -> &'static str {
        "rng"
    }
}

/// Random source that runs an external program and parses its hex output.
///
/// The byte count is appended as the last argument, so the default
/// invocation is `openssl rand -hex <bytes>`.
#[derive(Clone, Debug)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Run `program` with `args`, followed by the requested byte count.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSource {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `openssl rand -hex <bytes>`
    pub fn openssl() -> Self {
        CommandSource::new("openssl", ["rand", "-hex"])
    }
}

impl RandomSource for CommandSource {
    fn random_bits(&mut self, bits: usize) -> ApiResult<BigUint> {
        check_bits(bits)?;
        let len = byte_len(bits);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(len.to_string())
            .output()
            .map_err(|e| {
                Error::randomness("command source", format!("failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            return Err(Error::randomness(
                "command source",
                format!(
                    "{} exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            )
            .into());
        }

        let stdout = Zeroizing::new(output.stdout);
        let text = std::str::from_utf8(&stdout)
            .map_err(|_| Error::randomness("command source", "output is not UTF-8"))?;
        let mut buf = Zeroizing::new(
            hex::decode(text.trim())
                .map_err(|e| Error::randomness("command source", format!("output is not hex: {}", e)))?,
        );

        if buf.len() != len {
            return Err(Error::randomness(
                "command source",
                format!("expected {} random bytes, got {}", len, buf.len()),
            )
            .into());
        }
        mask_excess_bits(&mut buf, bits);

        Ok(BigUint::from_bytes_be(&buf))
    }

    fn name(&self) -> &'static str {
        "command"
    }
}

/// Redraws allowed before a source that only yields zero is declared broken
const MAX_ZERO_DRAWS: usize = 64;

/// Draw a private scalar in `[1, n-1]`.
///
/// Takes `bits` random bits, reduces them modulo the group order and draws
/// again on zero. `bits` must cover at least the bit length of the order.
pub fn generate_scalar<S: RandomSource + ?Sized>(
    curve: &Curve,
    source: &mut S,
    bits: usize,
) -> ApiResult<BigUint> {
    check_bits(bits)?;
    validate::parameter(
        bits as u64 >= curve.order().bits(),
        "random bits",
        "bit length is shorter than the group order",
    )?;

    for _ in 0..MAX_ZERO_DRAWS {
        let k = source.random_bits(bits)? % curve.order();
        if !k.is_zero() {
            return Ok(k);
        }
        log::debug!("{} source produced a zero scalar, drawing again", source.name());
    }

    Err(Error::randomness(source.name(), "generator kept producing zero").into())
}
