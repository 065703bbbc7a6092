// Small end-to-end walk through a typical acoustic-model frontend: stack a
// context window onto each frame, then downsample the time axis.
//
// Run with: cargo run --example context_window

use seqshape_core::{downsample, windowed_batch, DownsampleMethod, SeqShapeError, Tensor};

fn main() -> Result<(), SeqShapeError> {
    let (n_time, n_batch, n_dim) = (8, 1, 2);
    let data: Vec<f32> = (0..n_time * n_batch * n_dim).map(|x| x as f32).collect();
    let frames = Tensor::new(data, vec![n_time, n_batch, n_dim])?;
    println!("input frames:    {:?}", frames.shape());

    // Each frame now carries its two neighbours as context.
    let windowed = windowed_batch(&frames, 3)?;
    println!("with context:    {:?}", windowed.shape());

    // Halve the frame rate by averaging consecutive pairs.
    let decimated = downsample(&windowed, 0, 2, DownsampleMethod::Average)?;
    println!("after decimate:  {:?}", decimated.shape());

    for t in 0..decimated.shape()[0] {
        let mut row = Vec::new();
        for d in 0..decimated.shape()[2] {
            row.push(decimated.get(&[t, 0, d])?);
        }
        println!("t={t}: {row:?}");
    }
    Ok(())
}
