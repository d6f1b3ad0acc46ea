use crate::domain::commands::listing::ListingPage;
use crate::domain::models::Transaction as DomainTransaction;
use shared::{Transaction as SharedTransaction, TransactionListResponse};

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_domain(dto: SharedTransaction) -> DomainTransaction {
        DomainTransaction {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            category: dto.category,
            price: dto.price,
            image: dto.image,
            sold: dto.sold,
            date_of_sale: dto.date_of_sale,
        }
    }

    pub fn to_dto(domain: DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id,
            title: domain.title,
            price: domain.price,
            description: domain.description,
            category: domain.category,
            image: domain.image,
            sold: domain.sold,
            date_of_sale: domain.date_of_sale,
        }
    }

    pub fn to_list_response(page: ListingPage) -> TransactionListResponse {
        TransactionListResponse {
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            items: page.transactions.into_iter().map(Self::to_dto).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::transaction::test_support::sample_store;

    #[test]
    fn test_dto_round_trip_preserves_fields() {
        for tx in sample_store() {
            assert_eq!(TransactionMapper::to_domain(TransactionMapper::to_dto(tx.clone())), tx);
        }
    }

    #[test]
    fn test_list_response_copies_paging() {
        let page = ListingPage {
            total: 3,
            page: 2,
            per_page: 2,
            transactions: sample_store().into_iter().skip(2).collect(),
        };
        let response = TransactionMapper::to_list_response(page);
        assert_eq!(response.total, 3);
        assert_eq!(response.page, 2);
        assert_eq!(response.per_page, 2);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, 3);
    }
}
