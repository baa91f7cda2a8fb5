//! SHA-512 round computations
//!
//! Logical functions from FIPS 180-4 §4.1.3 and the 80-round function applied
//! to each 1024-bit block. All additions wrap modulo 2^64.

pub use super::K512;

/// σ0, used by the message schedule.
#[inline(always)]
pub fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

/// σ1, used by the message schedule.
#[inline(always)]
pub fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
pub fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
pub fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
pub fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expands the message schedule in place for round `i` (`i >= 16`).
///
/// The schedule is kept as a 16-word ring: W[i] overwrites W[i - 16].
#[inline(always)]
fn expand(w: &mut [u64; 16], i: usize) {
    let w16 = w[(i - 16) & 15];
    let w15 = w[(i - 15) & 15];
    let w7 = w[(i - 7) & 15];
    let w2 = w[(i - 2) & 15];

    w[i & 15] = w16
        .wrapping_add(small_sigma0(w15))
        .wrapping_add(w7)
        .wrapping_add(small_sigma1(w2));
}

/// Runs the 80 SHA-512 rounds over one block and folds the result into
/// `state`.
///
/// `w` holds the first 16 message words, big-endian decoded from the block.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u64; 8], mut w: [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (i, &ki) in K512.iter().enumerate() {
        if i >= 16 {
            expand(&mut w, i);
        }

        let wi = w[i & 15];

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Unrolled variant of `all_rounds`.
///
/// Instead of shifting all eight working variables each round, the round
/// macro renames them: after a round, `h` holds the new `a` and `d` holds the
/// new `e`. Eight rounds bring the names back to their starting positions.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u64; 8], mut w: [u64; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    macro_rules! R {
        (
            $a:ident, $b:ident, $c:ident, $d:ident,
            $e:ident, $f:ident, $g:ident, $h:ident, $i:expr
        ) => {{
            let i = $i;
            if i >= 16 {
                expand(&mut w, i);
            }

            let t1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(K512[i])
                .wrapping_add(w[i & 15]);

            let t2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));

            $d = $d.wrapping_add(t1);
            $h = t1.wrapping_add(t2);
        }};
    }

    let mut i = 0;
    while i < 80 {
        R!(a, b, c, d, e, f, g, h, i);
        R!(h, a, b, c, d, e, f, g, i + 1);
        R!(g, h, a, b, c, d, e, f, i + 2);
        R!(f, g, h, a, b, c, d, e, i + 3);
        R!(e, f, g, h, a, b, c, d, i + 4);
        R!(d, e, f, g, h, a, b, c, i + 5);
        R!(c, d, e, f, g, h, a, b, i + 6);
        R!(b, c, d, e, f, g, h, a, i + 7);
        i += 8;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}
