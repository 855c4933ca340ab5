use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cinema_tickets::{PurchaseOrder, PurchaseValidator, TicketType, TicketTypeRequest};

fn order_with(requests: usize) -> PurchaseOrder {
    // Alternating adults and children; sizes above the ticket limit hit the range check.
    let requests = (0..requests).map(|i| {
        let ticket_type = if i % 2 == 0 {
            TicketType::Adult
        } else {
            TicketType::Child
        };
        TicketTypeRequest::new(ticket_type, 1)
    });
    PurchaseOrder::new(1, requests)
}

fn bench_validate(c: &mut Criterion) {
    let validator = PurchaseValidator::default();
    let mut group = c.benchmark_group("validate");

    for size in [1usize, 5, 20, 200] {
        let order = order_with(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &order, |b, order| {
            b.iter(|| validator.validate(black_box(order)))
        });
    }

    group.finish();
}

fn bench_invalid_items(c: &mut Criterion) {
    let validator = PurchaseValidator::default();
    let order = PurchaseOrder::new(
        1,
        (0..50).map(|i| TicketTypeRequest::unrecognized(format!("TYPE-{i}"), -1)),
    );

    c.bench_function("validate_invalid_items_50", |b| {
        b.iter(|| validator.validate(black_box(&order)))
    });
}

criterion_group!(benches, bench_validate, bench_invalid_items);
criterion_main!(benches);
