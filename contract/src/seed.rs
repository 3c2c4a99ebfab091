//! Seed records written by `RecordStore::initialize`.

use dispute_types::Transaction;

/// `(TranId, ApprovalCode, BillDetails, CustomerDetails, Status)`
const SEED: [(&str, &str, &str, &str, &str); 7] = [
    (
        "transaction-0",
        "22310",
        "store:123,items:fooditems,datetime:06/06/2023",
        "Cname:Sam,Cnumber:,CardNumb:3345-1233",
        "Successful",
    ),
    (
        "transaction-1",
        "22311",
        "store:122,items:clothing,datetime:06/05/2023",
        "Cname:Ram,Cnumber:,CardNumb:3345-1235",
        "failure",
    ),
    (
        "transaction-2",
        "22312",
        "store:121,items:fooditems,datetime:06/03/2023",
        "Cname:Tom,Cnumber:,CardNumb:3345-1232",
        "Successful",
    ),
    (
        "transaction-3",
        "22313",
        "store:123,items:clothing,datetime:06/01/2023",
        "Cname:Jerry,Cnumber:,CardNumb:3345-1231",
        "disputed",
    ),
    (
        "transaction-4",
        "22314",
        "store:124,items:jellwery,datetime:06/07/2023",
        "Cname:Riki,Cnumber:,CardNumb:3345-1230",
        "Successful",
    ),
    (
        "transaction-5",
        "22315",
        "store:124,items:jellwery,datetime:06/07/2023",
        "Cname:Mike,Cnumber:,CardNumb:3345-1255",
        "Successful",
    ),
    (
        "transaction-6",
        "22316",
        "store:122,items:shoes,datetime:06/08/2023",
        "Cname:Mitch,Cnumber:,CardNumb:3345-1265",
        "failure",
    ),
];

/// The base set of transactions, in the order they are written.
pub fn seed_transactions() -> Vec<Transaction> {
    SEED.iter()
        .map(|&(id, approval, bill, customer, status)| {
            Transaction::new(id, approval, bill, customer, status)
        })
        .collect()
}
