use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use zero_rowbinary::col::ColumnDescriptor;
use zero_rowbinary::handler::DropHandler;
use zero_rowbinary::{
    Registry, ResultSetHandler, Value, decode_result, encode_rows_by_name, read_rows,
    write_header,
};

const NAMES: [&str; 4] = ["id", "name", "hair_color", "scores"];
const TYPES: [&str; 4] = ["UInt32", "String", "Nullable(String)", "Array(Float64)"];

pub struct User {
    pub id: u32,
    pub name: String,
    pub hair_color: Option<String>,
}

// Handler for collecting users
struct UsersHandler {
    users: Vec<User>,
}

impl UsersHandler {
    fn new() -> Self {
        Self { users: Vec::new() }
    }
}

impl ResultSetHandler for UsersHandler {
    #[inline(always)]
    fn resultset_start(&mut self, _cols: &[ColumnDescriptor]) -> zero_rowbinary::Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn row(&mut self, _cols: &[ColumnDescriptor], row: Vec<Value>) -> zero_rowbinary::Result<()> {
        let mut values = row.into_iter();
        let id = match values.next() {
            Some(Value::UInt(v)) => v as u32,
            _ => 0,
        };
        let name = match values.next() {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };
        let hair_color = match values.next() {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        self.users.push(User {
            id,
            name,
            hair_color,
        });
        Ok(())
    }

    #[inline(always)]
    fn resultset_end(&mut self, _num_rows: usize) -> zero_rowbinary::Result<()> {
        Ok(())
    }
}

fn users(size: usize) -> Vec<Vec<Value>> {
    (0..size)
        .map(|i| {
            vec![
                Value::UInt(i as u64),
                Value::String(format!("User {i}")),
                if i % 2 == 0 {
                    Value::from("black")
                } else {
                    Value::Null
                },
                Value::Array((0..8).map(|j| Value::Float64(j as f64 * 0.5)).collect()),
            ]
        })
        .collect()
}

fn response(size: usize, registry: &Registry) -> Vec<u8> {
    let mut buffer = Vec::new();
    write_header(&mut buffer, &NAMES, &TYPES).unwrap();
    buffer.extend(encode_rows_by_name(users(size), &TYPES, registry).unwrap());
    buffer
}

fn bench_decode_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_result");
    let registry = Registry::default();

    for size in [1, 100, 10_000].iter() {
        let buffer = response(*size, &registry);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| decode_result(&buffer, &registry).unwrap())
        });
    }
    group.finish();
}

fn bench_read_rows_handler(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_rows_handler");
    let registry = Registry::default();

    for size in [1, 100, 10_000].iter() {
        let buffer = response(*size, &registry);
        group.bench_with_input(BenchmarkId::new("users", size), size, |b, _| {
            let mut handler = UsersHandler::new();
            b.iter(|| {
                read_rows(&buffer, &registry, &mut handler).unwrap();
                std::mem::take(&mut handler.users)
            })
        });
        group.bench_with_input(BenchmarkId::new("drop", size), size, |b, _| {
            let mut handler = DropHandler::default();
            b.iter(|| {
                read_rows(&buffer, &registry, &mut handler).unwrap();
                handler.num_rows()
            })
        });
    }
    group.finish();
}

fn bench_encode_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_rows");
    let registry = Registry::default();

    for size in [1, 100, 10_000].iter() {
        let rows = users(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| encode_rows_by_name(&rows, &TYPES, &registry).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_decode_result,
    bench_read_rows_handler,
    bench_encode_rows
);
criterion_main!(benches);
