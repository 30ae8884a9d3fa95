
use criterion::{criterion_group, criterion_main, Criterion};
use packed_modes::bitmatrix::storage::BitMatrix;
use packed_modes::bitmatrix::row::classify;
use packed_modes::bitmatrix::sweep::{check_rows,pre_check_rows3};

fn criterion_benchmark(crit: &mut Criterion) {
    let sizes = vec![128usize,512,1024];
    for size in sizes {
        let mut m = BitMatrix::new(size,size);
        m.randomize();
        let mut zeros = BitMatrix::new(size,size/4);
        zeros.randomize();

        crit.bench_function(&format!("classify {}",size), |crit| crit.iter(|| {
            classify(m.row(0), m.row(1))
        }));

        crit.bench_function(&format!("count zero bits {}",size), |crit| crit.iter(|| {
            m.count_zero_bits_per_row()
        }));

        crit.bench_function(&format!("check_rows {}",size), |crit| crit.iter(|| {
            check_rows(&m, size/2)
        }));

        crit.bench_function(&format!("pre_check_rows3 {}",size), |crit| crit.iter(|| {
            pre_check_rows3(&zeros, &m)
        }));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
